pub mod nav_items;
pub mod side_nav;

pub use side_nav::SideNav;

pub mod dashboard_shell;
pub mod header_bar;

pub use dashboard_shell::DashboardShell;
pub use header_bar::HeaderBar;

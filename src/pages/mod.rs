//! Pages
//!
//! The dashboard plus one descriptor per CRUD page.

pub mod boxes;
pub mod dashboard;
pub mod tasks;
pub mod transports;

pub use boxes::BoxesPage;
pub use dashboard::DashboardPage;
pub use tasks::TasksPage;
pub use transports::TransportsPage;

pub mod dashboard;
pub mod state;

pub use dashboard::RevenueDashboard;

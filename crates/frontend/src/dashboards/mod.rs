pub mod d001_revenue;

pub use d001_revenue::ui::RevenueDashboard;

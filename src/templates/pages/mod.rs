pub mod dashboard;
pub mod incidents;
pub mod trees;

pub use dashboard::{dashboard_page, DashboardVm};
pub use incidents::incidents_page;
pub use trees::trees_page;

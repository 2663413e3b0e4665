mod bulk;
mod upgrade;

pub use bulk::BulkAmount;
pub use upgrade::{UpgradeSet, UpgradeState, cost_at_level};

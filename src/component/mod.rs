mod batch;
mod plan;

pub use batch::TaskGroup;
pub use plan::{apply_plan, Plan, PlanTally};

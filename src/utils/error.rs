use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("task #{0:02} left unassigned in plan")]
    UnassignedTask(usize),
    #[error("task #{0:02} routed to node {1} outside cluster of {2}")]
    NodeOutOfRange(usize, i32, usize),
    #[error("plan covers {0} tasks but batch holds {1}")]
    PlanTooShort(usize, usize),
}

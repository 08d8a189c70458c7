mod node;

pub use node::{NodeInfo, Resources};

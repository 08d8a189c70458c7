mod aco;
mod base;

pub use aco::{greedy_init, optimize};
pub use base::matrix::Matrix;
pub use base::sampling::{arg_max, pick, shuffle_ints};

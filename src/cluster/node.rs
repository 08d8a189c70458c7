use crate::{W_C, W_M};


#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resources {
    pub memory_bytes: i64,
    pub nano_cpus: i64,
}

/// A worker node seen as two resource tuples: the capacity it was brought
/// up with and what is still unreserved. The available half doubles as
/// scratch space during plan construction.
#[derive(Clone, Copy, Debug)]
pub struct NodeInfo {
    pub total: Resources,
    pub available: Resources,
}


impl Resources {
    pub fn new(memory_bytes: i64, nano_cpus: i64) -> Self {
        Resources { memory_bytes, nano_cpus }
    }
}

impl NodeInfo {
    pub fn new(total: Resources) -> Self {
        NodeInfo { total, available: total }
    }
    /// Desirability of the node given its current headroom, the weighted
    /// average of the availability fractions of both dimensions. An idle
    /// node scores 1.0, a saturated one 0.0.
    pub fn fitness(&self) -> f64 {
        let r_c = self.available.nano_cpus as f64 / self.total.nano_cpus as f64;
        let r_m = self.available.memory_bytes as f64 / self.total.memory_bytes as f64;
        W_C * r_c + W_M * r_m
    }
    /// No slack, no overcommit: the reservation must fit in both dimensions.
    pub fn fits(&self, reservation: Resources) -> bool {
        self.available.memory_bytes >= reservation.memory_bytes
            && self.available.nano_cpus >= reservation.nano_cpus
    }
    pub fn debit(&mut self, reservation: Resources) {
        self.available.memory_bytes -= reservation.memory_bytes;
        self.available.nano_cpus -= reservation.nano_cpus;
    }
    pub fn restore(&mut self, reference: Resources) {
        self.available = reference;
    }
}

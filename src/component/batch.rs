use hashbrown::HashMap;
use itertools::Itertools;

use crate::cluster::Resources;


/// A batch of tasks keyed by stable id. Only the reservation pair matters
/// for placement; everything else about a task lives with its owner.
#[derive(Clone, Debug, Default)]
pub struct TaskGroup {
    reservations: HashMap<String, Resources>,
}


impl TaskGroup {
    pub fn new() -> Self {
        TaskGroup { ..Default::default() }
    }
    pub fn len(&self) -> usize {
        self.reservations.len()
    }
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
    pub fn insert(&mut self, id: impl Into<String>, reservation: Resources) {
        self.reservations.insert(id.into(), reservation);
    }
    pub fn reservation(&self, id: &str) -> Resources {
        self.reservations.get(id).copied()
            .expect("task not found")
    }
    /// Task ids in canonical order, the lexicographic sort. Every walk over
    /// the batch uses this order so plan indices stay comparable.
    pub fn ordered(&self) -> Vec<&str> {
        self.reservations.keys()
            .map(String::as_str)
            .sorted()
            .collect()
    }
}

use hashbrown::HashMap;

use crate::cluster::NodeInfo;
use crate::component::TaskGroup;
use crate::utils::error::Error;
use crate::PLAN_SIZE;


/// One placement: entry i is the node index chosen for the i-th task in
/// canonical order, or -1 when no node was feasible. The array is fixed at
/// PLAN_SIZE so plans compare and hash by value; entries past the batch
/// length stay zero as padding.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Plan([i32; PLAN_SIZE]);

/// Multiset of constructed plans. Ties on the winning count break towards
/// the plan recorded first.
#[derive(Default)]
pub struct PlanTally {
    counts: HashMap<Plan, usize>,
    order: Vec<Plan>,
}


impl Plan {
    pub fn get(&self, idx: usize) -> i32 {
        self.0[idx]
    }
    pub fn set(&mut self, idx: usize, node: i32) {
        self.0[idx] = node;
    }
    /// The meaningful prefix, with the padding cut off.
    pub fn assignments(&self, len: usize) -> &[i32] {
        &self.0[..len]
    }
}

impl Default for Plan {
    fn default() -> Self {
        Plan([0; PLAN_SIZE])
    }
}

impl PlanTally {
    pub fn new() -> Self {
        PlanTally { ..Default::default() }
    }
    pub fn record(&mut self, plan: Plan) {
        let count = self.counts.entry(plan).or_insert(0);
        if *count == 0 {
            self.order.push(plan);
        }
        *count += 1;
    }
    pub fn winner(&self) -> (usize, &Plan) {
        debug_assert!(!self.order.is_empty());
        let mut max = 0;
        let mut max_plan = &self.order[0];
        for plan in &self.order {
            let count = self.counts[plan];
            if count > max {
                max = count;
                max_plan = plan;
            }
        }
        (max, max_plan)
    }
}

/// Debits each node by the reservation of the task assigned to it, walking
/// tasks in canonical order. Feasibility is not rechecked here; callers
/// screen the plan for -1 entries and availability beforehand.
pub fn apply_plan(plan: &[i32], batch: &TaskGroup,
                  mut nodes: Vec<NodeInfo>) -> Result<Vec<NodeInfo>, Error> {
    if plan.len() < batch.len() {
        return Err(Error::PlanTooShort(plan.len(), batch.len()));
    }
    for (idx, id) in batch.ordered().iter().enumerate() {
        let node_idx = plan[idx];
        if node_idx < 0 {
            return Err(Error::UnassignedTask(idx));
        }
        if node_idx as usize >= nodes.len() {
            return Err(Error::NodeOutOfRange(idx, node_idx, nodes.len()));
        }
        nodes[node_idx as usize].debit(batch.reservation(id));
    }
    Ok(nodes)
}

use rand::Rng;
use rand_chacha::ChaChaRng;
use tracing::{debug, trace};

use super::base::matrix::Matrix;
use super::base::sampling::{arg_max, pick, shuffle_ints};
use crate::cluster::{NodeInfo, Resources};
use crate::component::{Plan, PlanTally, TaskGroup};
use crate::utils::config::Parameters;
use crate::PLAN_SIZE;


/// Seeds the pheromone table: every cell starts at the node's fitness on
/// the untouched availability, then a round-robin walk over the canonical
/// task order debits each visited node and overwrites its cell with the
/// post-debit fitness. The walk never checks feasibility and may push
/// availability negative; the values only seed the search and every ant
/// resets from the caller's snapshot.
pub fn greedy_init(batch: &TaskGroup, nodes: &mut [NodeInfo]) -> Matrix {
    let ids = batch.ordered();
    let mut tau = Matrix::zeros(ids.len(), nodes.len());
    for row in 0..tau.rows() {
        for col in 0..tau.cols() {
            tau.set(row, col, nodes[col].fitness());
        }
    }

    let mut col = 0;
    for (row, id) in ids.iter().enumerate() {
        nodes[col].debit(batch.reservation(id));
        tau.set(row, col, nodes[col].fitness());
        col = (col + 1) % nodes.len();
    }
    tau
}

/// Runs the ant colony over the batch and returns the most frequently
/// constructed plan together with the fraction of ants that agreed on it.
///
/// The nodes' available resources are used as scratch space while ants
/// construct candidate plans, and are restored to their entry values
/// before returning; the winning plan is not applied. Compose successive
/// placement rounds with [`apply_plan`](crate::component::apply_plan).
///
/// Tasks that fit no node are reported in-band as a -1 plan entry. An
/// empty batch yields an empty plan with confidence 1.0.
pub fn optimize(batch: &TaskGroup, nodes: &mut [NodeInfo],
                param: &Parameters, rng: &mut ChaChaRng) -> (f64, Vec<i32>) {
    assert!(!nodes.is_empty(), "placement needs at least one node");
    assert!(param.ants > 0, "placement needs at least one ant");
    assert!(batch.len() <= PLAN_SIZE,
            "batch of {} tasks exceeds plan capacity {}", batch.len(), PLAN_SIZE);

    let reference: Vec<Resources> = nodes.iter().map(|node| node.available).collect();
    let tau_0 = greedy_init(batch, nodes);
    let mut tau = tau_0.clone();

    let ids = batch.ordered();
    let mut tally = PlanTally::new();

    for ant in 0..param.ants {
        debug!("== ant {}", ant);
        for (node, &snapshot) in nodes.iter_mut().zip(&reference) {
            node.restore(snapshot);
        }

        let mut orders: Vec<usize> = (0..nodes.len()).collect();
        shuffle_ints(&mut orders, rng);
        trace!("node order = {:?}", orders);

        let mut plan = Plan::default();
        for (task_idx, id) in ids.iter().enumerate() {
            let reservation = batch.reservation(id);

            let mut ph = vec![0.0; nodes.len()];
            let mut ph_sum = 0.0;
            for &node_idx in &orders {
                if !nodes[node_idx].fits(reservation) {
                    continue;
                }
                // the heuristic reads the headroom left after the task
                let mut probe = nodes[node_idx];
                probe.debit(reservation);
                let nu = probe.fitness();
                let pheromone = tau.get(task_idx, node_idx);
                ph[node_idx] = pheromone.powf(param.alpha) * nu.powf(param.beta);
                ph_sum += ph[node_idx];
            }

            let chosen = if ph_sum == 0.0 {
                // nothing fits: leave the sentinel, touch neither tau nor
                // the availability
                -1
            } else {
                let p: Vec<f64> = ph.iter().map(|weight| weight / ph_sum).collect();
                trace!("p = {:?}", p);
                match rng.gen::<f64>() >= param.q {
                    true => arg_max(&p),
                    false => pick(&p, rng) as i32,
                }
            };
            plan.set(task_idx, chosen);

            if chosen >= 0 {
                let chosen = chosen as usize;
                tau.set(task_idx, chosen, nodes[chosen].fitness());

                // evaporate forward into the next task's row; the chosen
                // column is overwritten last and that value stands
                if task_idx + 1 < ids.len() {
                    for col in 0..tau.cols() {
                        tau.set(task_idx + 1, col,
                                (1.0 - param.rho) * tau.get(task_idx, col));
                    }
                    tau.set(task_idx + 1, chosen,
                            (1.0 - param.rho) * nodes[chosen].fitness());
                }

                nodes[chosen].debit(reservation);
            }
        }

        trace!("tau =\n{}", tau);
        trace!("p(tau) =\n{}", tau.normalized());
        tally.record(plan);
    }

    for (node, &snapshot) in nodes.iter_mut().zip(&reference) {
        node.restore(snapshot);
    }

    let (count, winner) = tally.winner();
    let confidence = count as f64 / param.ants as f64;
    (confidence, winner.assignments(ids.len()).to_vec())
}

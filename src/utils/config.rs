use serde::Deserialize;

#[derive(Debug, Default)]
pub struct Args {
    pub arg_cluster: String,
    pub arg_batch: String,
    pub arg_fold: u32,
    pub flag_config: Option<String>,
    pub flag_seed: Option<u64>,
    pub flag_ants: Option<usize>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub name: String,
    pub rounds: usize,
    pub seed: u64,
    pub parameters: Parameters,
}

/// Colony tuning: q is the exploration threshold, rho the evaporation
/// rate, alpha and beta the pheromone and heuristic exponents.
#[derive(Deserialize, Clone, Debug)]
pub struct Parameters {
    pub ants: usize,
    pub q: f64,
    pub rho: f64,
    pub alpha: f64,
    pub beta: f64,
}

impl Config {
    pub fn override_from_args(&mut self, args: &Args) {
        if let Some(flag) = args.flag_seed {
            self.seed = flag;
        }
        if let Some(flag) = args.flag_ants {
            self.parameters.ants = num::clamp(flag, 1, 100_000);
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: String::from("default"),
            rounds: 2,
            seed: 42,
            parameters: Parameters {
                ants: 100,
                q: 0.1,
                rho: 0.01,
                alpha: 1.0,
                beta: 1.0,
            },
        }
    }
}

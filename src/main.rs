use formica::algorithm::optimize;
use formica::component::apply_plan;
use formica::utils::config::{Args, Config};
use formica::utils::yaml;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use regex::Regex;
use std::env;
use std::time::Instant;

fn main() {
    init_tracing();
    let args = parse_args();
    let mut config = match &args.flag_config {
        Some(path) => yaml::load_config(path),
        None => Config::default(),
    };
    config.override_from_args(&args);

    let mut nodes = yaml::load_cluster(&args.arg_cluster);
    let batch = yaml::load_batch(&args.arg_batch, args.arg_fold);
    let mut rng = ChaChaRng::seed_from_u64(config.seed);

    for round in 1..=config.rounds {
        let start = Instant::now();
        let (confidence, plan) = optimize(&batch, &mut nodes, &config.parameters, &mut rng);
        let elapsed = start.elapsed().as_micros();

        println!("--- #{} computing time: {} μs ---", round, elapsed);
        println!("plan = {:?}", plan);
        println!("confidence = {:.2}", confidence);

        if plan.contains(&-1) {
            println!("some tasks fit no node, stopping after round #{}", round);
            break;
        }
        nodes = apply_plan(&plan, &batch, nodes)
            .expect("Failed to apply the winning plan");
    }
}

fn parse_args() -> Args {
    let mut args: Vec<String> = env::args().collect();
    let re = Regex::new(r"--(config|seed|ants)=([^ ]+)").unwrap();
    let mut flag_config: Option<String> = None;
    let mut flag_seed: Option<u64> = None;
    let mut flag_ants: Option<usize> = None;
    let mut i = 1;
    while i < args.len() {
        if let Some(cap) = re.captures(&args[i]) {
            match &cap[1] {
                "config" => flag_config = Some(cap[2].to_owned()),
                "seed" => flag_seed = Some(cap[2].parse().expect("Failed to parse --seed")),
                _ => flag_ants = Some(cap[2].parse().expect("Failed to parse --ants")),
            }
            args.remove(i);
        } else {
            i += 1;
        }
    }
    if args.len() != 4 {
        panic!("usage: formica [cluster.yaml] [batch.yaml] [fold] \
                (--config=[config.yaml]) (--seed=[u64]) (--ants=[count])");
    }
    Args {
        arg_cluster: args[1].clone(),
        arg_batch: args[2].clone(),
        arg_fold: args[3].parse().expect("Failed to parse the fold multiplier"),
        flag_config,
        flag_seed,
        flag_ants,
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

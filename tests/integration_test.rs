use formica::algorithm::optimize;
use formica::component::apply_plan;
use formica::utils::yaml;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use std::time::Instant;

#[test]
fn it_places_successive_rounds() {
    let mut nodes = yaml::load_cluster("data/cluster/typical.yaml");
    let batch = yaml::load_batch("data/batch/uniform.yaml", 1);
    let config = yaml::load_config("data/config/default.yaml");
    let mut rng = ChaChaRng::seed_from_u64(config.seed);

    for round in 1..=config.rounds {
        let start = Instant::now();
        let (confidence, plan) = optimize(&batch, &mut nodes, &config.parameters, &mut rng);
        let elapsed = start.elapsed().as_micros();
        println!("--- #{} elapsed time: {} μs ---", round, elapsed);

        assert_eq!(plan.len(), batch.len());
        assert!(plan.iter().all(|&entry| entry >= 0));
        assert!(confidence > 0.0 && confidence <= 1.0);

        nodes = apply_plan(&plan, &batch, nodes).unwrap();
        for node in &nodes {
            assert!(node.available.memory_bytes >= 0);
            assert!(node.available.nano_cpus >= 0);
        }
    }
}

#[test]
fn it_places_a_heavy_batch_across_mixed_nodes() {
    let mut nodes = yaml::load_cluster("data/cluster/unbalanced.yaml");
    let batch = yaml::load_batch("data/batch/heavy.yaml", 1);
    let config = yaml::load_config("data/config/default.yaml");
    let mut rng = ChaChaRng::seed_from_u64(config.seed);

    let (_, plan) = optimize(&batch, &mut nodes, &config.parameters, &mut rng);

    let mut sorted = plan.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn it_folds_the_batch_before_placement() {
    let mut nodes = yaml::load_cluster("data/cluster/typical.yaml");
    let batch = yaml::load_batch("data/batch/uniform.yaml", 2);
    let mut config = yaml::load_config("data/config/default.yaml");
    config.seed = 420;
    let mut rng = ChaChaRng::seed_from_u64(config.seed);

    assert_eq!(batch.len(), 10);
    let (_, plan) = optimize(&batch, &mut nodes, &config.parameters, &mut rng);

    assert_eq!(plan.len(), 10);
    assert!(plan.iter().all(|&entry| (0..3).contains(&entry)));
}

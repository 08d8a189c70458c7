use std::fs;

use serde::Deserialize;

use super::config::Config;
use crate::cluster::{NodeInfo, Resources};
use crate::component::TaskGroup;

#[derive(Deserialize)]
struct ClusterYaml {
    scale: ClusterScaleYaml,
    nodes: Vec<NodeYaml>,
}

#[derive(Deserialize)]
struct ClusterScaleYaml {
    nodes: usize,
}

#[derive(Deserialize)]
struct NodeYaml {
    memory: i64,
    cpus: i64,
}

#[derive(Deserialize)]
struct BatchYaml {
    scale: BatchScaleYaml,
    groups: Vec<GroupYaml>,
}

#[derive(Deserialize)]
struct BatchScaleYaml {
    groups: usize,
    tasks: usize,
}

#[derive(Deserialize)]
struct GroupYaml {
    name: String,
    replicas: usize,
    memory: i64,
    cpus: i64,
}

pub fn load_cluster(path: &str) -> Vec<NodeInfo> {
    let text = fs::read_to_string(path)
        .expect("Failed to read cluster yaml file");
    let yaml: ClusterYaml = serde_yaml::from_str(&text)
        .expect("Failed to parse cluster yaml file");
    debug_assert_eq!(yaml.scale.nodes, yaml.nodes.len());
    yaml.nodes.iter()
        .map(|node| NodeInfo::new(Resources::new(node.memory, node.cpus)))
        .collect()
}

pub fn load_batch(path: &str, fold: u32) -> TaskGroup {
    let text = fs::read_to_string(path)
        .expect("Failed to read batch yaml file");
    let yaml: BatchYaml = serde_yaml::from_str(&text)
        .expect("Failed to parse batch yaml file");
    debug_assert_eq!(yaml.scale.groups, yaml.groups.len());
    debug_assert_eq!(yaml.scale.tasks, check_tasks(&yaml));
    let mut batch = TaskGroup::new();
    for group in &yaml.groups {
        let reservation = Resources::new(group.memory, group.cpus);
        for i in 0..group.replicas * fold as usize {
            batch.insert(format!("{}-{}", group.name, i), reservation);
        }
    }
    batch
}

pub fn load_config(path: &str) -> Config {
    let text = fs::read_to_string(path)
        .expect("Failed to read config yaml file");
    #[allow(clippy::let_and_return)]
    let yaml = serde_yaml::from_str(&text)
        .expect("Failed to parse config yaml file");
    yaml
}

fn check_tasks(yaml: &BatchYaml) -> usize {
    yaml.groups.iter().map(|group| group.replicas).sum()
}

// Demonstration: play a policy on a small maze and print evaluation metrics.
//
// Run from the repo root:
//   RUST_LOG=mazewalk=debug cargo run --example maze_demo -- --policy perimeter --episodes 20

use std::env;

use mazewalk::policy::{
    GoWestPolicy, PerimeterSeekPolicy, PersistencePolicy, RandomPolicy, SensingPolicy,
};
use mazewalk::{Maze, Policy, PolicyConfig, RunConfig, Runner};
use tracing_subscriber::EnvFilter;

const LAYOUT: &str = "\
%%%%%%%%%%%
%P....%...%
%.%%%.%.%.%
%.........%
%.%%%.%%%.%
%....o...G%
%%%%%%%%%%%";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let policy_name = arg_value(&args, "--policy")
        .unwrap_or("perimeter")
        .to_string();
    let episodes: usize = arg_value(&args, "--episodes")
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let maze: Maze = match LAYOUT.parse() {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("Bad layout: {}", e);
            std::process::exit(1);
        }
    };

    let make_policy = |episode: usize| -> Option<Box<dyn Policy>> {
        let seed = seed + episode as u64;
        let policy: Box<dyn Policy> = match policy_name.as_str() {
            "perimeter" => Box::new(PerimeterSeekPolicy::seeded(PolicyConfig::default(), seed)),
            "random" => Box::new(RandomPolicy::seeded(seed)),
            "persistence" => Box::new(PersistencePolicy::seeded(seed)),
            "west" => Box::new(GoWestPolicy::seeded(seed)),
            "sensing" => Box::new(SensingPolicy::new()),
            _ => return None,
        };
        Some(policy)
    };
    if make_policy(0).is_none() {
        eprintln!(
            "Unknown --policy '{}'; expected perimeter, random, persistence, west or sensing.",
            policy_name
        );
        std::process::exit(2);
    }

    let runner = Runner::new(RunConfig::default());
    let result = runner.evaluate(
        episodes,
        |_| maze.clone(),
        |episode| match make_policy(episode) {
            Some(policy) => policy,
            None => Box::new(RandomPolicy::seeded(seed)),
        },
    );
    match result {
        Ok(metrics) => {
            println!("Policy: {}", policy_name);
            println!("{}", metrics);
        }
        Err(e) => {
            eprintln!("Episode failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

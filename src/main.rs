//! Knapsack CLI - Evolve a Pareto front over a random item catalog.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use u_mokp::{
    knapsack::{ItemCatalog, KnapsackConfig, KnapsackProblem},
    moea::{EngineConfig, Individual},
};

const CATALOG_SEED: u64 = 72;
const ITEM_COUNT: usize = 20;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} [generations] [seed]", program);
    eprintln!();
    eprintln!("Run NSGA-II on a random {}-item knapsack.", ITEM_COUNT);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  generations  Number of generations (default: 50)");
    eprintln!("  seed         Seed for the evolutionary run (default: random)");
    std::process::exit(1);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 3 || args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        usage(&args[0]);
    }

    let mut config = EngineConfig::default();
    if let Some(arg) = args.get(1) {
        let generations = arg.parse().unwrap_or_else(|e| {
            eprintln!("Invalid generations '{}': {}", arg, e);
            usage(&args[0])
        });
        config = config.with_generations(generations);
    }
    if let Some(arg) = args.get(2) {
        let seed = arg.parse().unwrap_or_else(|e| {
            eprintln!("Invalid seed '{}': {}", arg, e);
            usage(&args[0])
        });
        config = config.with_seed(seed);
    }

    let catalog = ItemCatalog::random(ITEM_COUNT, &mut StdRng::seed_from_u64(CATALOG_SEED));
    let problem = KnapsackProblem::new(catalog, KnapsackConfig::default()).unwrap_or_else(|e| {
        eprintln!("Error building problem: {}", e);
        std::process::exit(1);
    });

    println!("Multi-objective Knapsack");
    println!("========================");
    println!(
        "Items: {}  max items: {}  max weight: {}",
        problem.catalog().len(),
        problem.config().max_items,
        problem.config().max_weight
    );
    println!(
        "mu: {}  lambda: {}  cxpb: {}  mutpb: {}  generations: {}",
        config.population_size,
        config.offspring_count,
        config.crossover_rate,
        config.mutation_rate,
        config.generations
    );
    println!();

    let engine = problem.engine(config).unwrap_or_else(|e| {
        eprintln!("Error building engine: {}", e);
        std::process::exit(1);
    });

    let start = Instant::now();
    let result = engine.run();
    let elapsed = start.elapsed();

    print!("{}", result.logbook);
    println!();
    println!(
        "Pareto front ({} sets, {} evaluations, {:.2?})",
        result.archive.len(),
        result.evaluations,
        elapsed
    );
    for set in &result.archive {
        if let Some(fitness) = set.fitness() {
            println!("  {}  {}", fitness, set);
        }
    }
}

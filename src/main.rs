//! Regex golf CLI - Score a genome against a JSON problem definition.

use std::path::PathBuf;
use std::time::Instant;

use regex_golf::{GolfEvaluator, GolfProblem};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_problem();
        return;
    }

    if args.len() < 3 {
        eprintln!("Usage: {} <problem.json> <genome>", args[0]);
        eprintln!();
        eprintln!("Decode a genome into a pattern and score it.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  problem.json  Path to problem definition file");
        eprintln!("  genome        Comma-separated genes, e.g. 1,0,1,-1");
        eprintln!();
        eprintln!("An example problem is printed with the --example flag.");
        std::process::exit(1);
    }

    let problem_path = PathBuf::from(&args[1]);
    let problem = GolfProblem::from_json_file(&problem_path).unwrap_or_else(|e| {
        eprintln!("Error loading problem: {}", e);
        std::process::exit(1);
    });

    let genome: Vec<f64> = args[2]
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .unwrap_or_else(|e| {
            eprintln!("Error parsing genome: {}", e);
            std::process::exit(1);
        });

    let evaluator = GolfEvaluator::from_problem(&problem).unwrap_or_else(|e| {
        eprintln!("Error building evaluator: {}", e);
        std::process::exit(1);
    });

    println!("Regex Golf");
    println!("==========");
    println!(
        "Words: {} positive, {} negative",
        evaluator.positive().len(),
        evaluator.negative().len()
    );
    println!("Genome length: {}", evaluator.genome_len());
    println!();

    let start = Instant::now();
    let score = evaluator.evaluate_detailed(&genome).unwrap_or_else(|e| {
        eprintln!("Error decoding genome: {}", e);
        std::process::exit(1);
    });
    let elapsed = start.elapsed();

    println!("Pattern: {:?}", score.pattern);
    if score.valid {
        println!(
            "  Positive matches: {}/{}",
            score.positive_matches,
            evaluator.positive().len()
        );
        println!(
            "  Negative matches: {}/{}",
            score.negative_matches,
            evaluator.negative().len()
        );
        println!("  Solution: {}", score.is_solution(evaluator.positive().len()));
    } else {
        println!("  Invalid regex");
    }
    println!("Fitness: {}", score.fitness);
    println!("Time: {:.1}us", elapsed.as_secs_f64() * 1e6);
}

fn print_example_problem() {
    let problem = GolfProblem::default();

    println!("Example problem (problem.json):");
    match serde_json::to_string_pretty(&problem) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing problem: {}", e),
    }
}

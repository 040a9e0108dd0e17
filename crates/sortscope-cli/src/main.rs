//! sortscope command-line interface.
//!
//! Provides the `sortscope` binary with subcommands for running the
//! instrumented sorting engine and inspecting its output. All machine-
//! readable output is JSON on stdout; logs go to stderr.
//!
//! Configuration:
//! - `SORTSCOPE_MAX_LEN`: default input length limit when `--max-len` is not given.
//! - `-v` switches stderr logging from warnings to debug.
//!
//! `run` and `replay` take their input either as positional values or from
//! `--generate <DIST> --size N --seed S`.

use std::process;

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use tracing::Level;

use sortscope_core::{Algorithm, DESCRIPTORS};
use sortscope_engine::{verify, Distribution, Engine, EngineConfig, Replay, VerifyConfig};

/// Instrumented sorting engine.
#[derive(Parser)]
#[command(
    name = "sortscope",
    about = "Run sorting algorithms and print their action logs"
)]
struct Cli {
    /// Emit debug logs on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run an algorithm and print the result with its full action log.
    Run {
        /// Algorithm identifier (unknown ids run bubble sort unless --strict).
        algorithm: String,

        #[command(flatten)]
        input: InputArgs,

        /// Print only the sorted sequence and statistics.
        #[arg(long)]
        summary: bool,

        /// Reject unknown algorithm identifiers.
        #[arg(long)]
        strict: bool,

        /// Maximum input length (default: $SORTSCOPE_MAX_LEN, else unlimited).
        #[arg(long)]
        max_len: Option<usize>,
    },

    /// Print complexity and description for one or all algorithms.
    Describe {
        /// Algorithm identifier (default: all).
        algorithm: Option<String>,
    },

    /// List the known algorithm identifiers.
    List,

    /// Run an algorithm and show the state after the first N actions.
    Replay {
        algorithm: String,

        #[command(flatten)]
        input: InputArgs,

        /// Number of actions to apply (default: all).
        #[arg(short, long)]
        steps: Option<usize>,
    },

    /// Check every algorithm against seeded random inputs.
    Verify {
        /// Random inputs per algorithm.
        #[arg(short, long, default_value_t = 100)]
        iterations: u32,

        /// PRNG seed.
        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        /// Maximum random input length.
        #[arg(long, default_value_t = 32)]
        max_len: usize,

        /// Restrict to these algorithms (default: all).
        #[arg(short, long)]
        algorithm: Vec<String>,
    },
}

/// Where the input sequence comes from.
#[derive(Args)]
struct InputArgs {
    /// Values to sort.
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Generate the input instead: random, nearly-sorted, reversed or few-unique.
    #[arg(long, value_name = "DIST", conflicts_with = "values")]
    generate: Option<Distribution>,

    /// Length of the generated input.
    #[arg(long, default_value_t = 20, requires = "generate")]
    size: usize,

    /// PRNG seed for the generated input.
    #[arg(long, default_value_t = 0, requires = "generate")]
    seed: u64,
}

impl InputArgs {
    fn values(self) -> Vec<f64> {
        match self.generate {
            Some(distribution) => {
                let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
                distribution.generate(self.size, &mut rng)
            }
            None => self.values,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let exit_code = match cli.command {
        Commands::Run {
            algorithm,
            input,
            summary,
            strict,
            max_len,
        } => {
            let config = engine_config(max_len, strict);
            run_sort(&algorithm, &input.values(), summary, config)
        }
        Commands::Describe { algorithm } => run_describe(algorithm.as_deref()),
        Commands::List => run_list(),
        Commands::Replay {
            algorithm,
            input,
            steps,
        } => run_replay(&algorithm, &input.values(), steps),
        Commands::Verify {
            iterations,
            seed,
            max_len,
            algorithm,
        } => run_verify(iterations, seed, max_len, &algorithm),
    };
    process::exit(exit_code);
}

/// Builds the engine configuration from flags, falling back to the environment.
fn engine_config(max_len: Option<usize>, strict_ids: bool) -> EngineConfig {
    let max_len = max_len.or_else(|| {
        std::env::var("SORTSCOPE_MAX_LEN")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(len) => Some(len),
                Err(e) => {
                    tracing::warn!("ignoring SORTSCOPE_MAX_LEN='{}': {}", raw, e);
                    None
                }
            })
    });
    EngineConfig {
        max_len,
        strict_ids,
    }
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("{{\"error\": \"failed to serialize result: {}\"}}", e),
    }
}

/// Execute the run subcommand.
///
/// Returns exit code: 0 = success, 1 = input rejected.
fn run_sort(algorithm: &str, values: &[f64], summary: bool, config: EngineConfig) -> i32 {
    let mut engine = Engine::new(config);
    match engine.run(algorithm, values) {
        Ok(result) => {
            if summary {
                print_json(&json!({
                    "algorithm": result.algorithm,
                    "sorted": result.sorted,
                    "actions": result.actions.len(),
                    "stats": result.stats,
                }));
            } else {
                print_json(&result);
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn run_describe(algorithm: Option<&str>) -> i32 {
    match algorithm {
        Some(id) => match Algorithm::from_id(id) {
            Some(algorithm) => {
                print_json(algorithm.descriptor());
                0
            }
            None => {
                // Mirror the lookup fallbacks rather than failing.
                print_json(&json!({
                    "algorithm": id,
                    "complexity": sortscope_core::complexity(id),
                    "description": sortscope_core::description(id),
                }));
                0
            }
        },
        None => {
            print_json(&DESCRIPTORS);
            0
        }
    }
}

fn run_list() -> i32 {
    for algorithm in Algorithm::ALL {
        println!("{}", algorithm);
    }
    0
}

fn run_replay(algorithm: &str, values: &[f64], steps: Option<usize>) -> i32 {
    let mut engine = Engine::new(engine_config(None, false));
    let result = match engine.run(algorithm, values) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let mut replay = match Replay::new(values, &result.actions) {
        Ok(replay) => replay,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    replay.seek(steps.unwrap_or(result.actions.len()));

    print_json(&json!({
        "algorithm": result.algorithm,
        "position": replay.position(),
        "total": replay.len(),
        "last": replay.last(),
        "highlighted": replay.highlighted(),
        "current": replay.current(),
        "stats": replay.stats(),
    }));
    0
}

/// Execute the verify subcommand.
///
/// Returns exit code: 0 = all checks passed, 1 = bad arguments,
/// 2 = at least one failure.
fn run_verify(iterations: u32, seed: u64, max_len: usize, ids: &[String]) -> i32 {
    let algorithms = if ids.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        let mut algorithms = Vec::with_capacity(ids.len());
        for id in ids {
            match id.parse::<Algorithm>() {
                Ok(algorithm) => algorithms.push(algorithm),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return 1;
                }
            }
        }
        algorithms
    };

    let config = VerifyConfig {
        iterations,
        random_seed: seed,
        max_len,
        ..VerifyConfig::default()
    };
    let report = verify(&algorithms, &config);
    print_json(&report);

    if report.is_success() {
        0
    } else {
        eprintln!(
            "{} of {} runs failed (seed {})",
            report.failures.len(),
            report.total_run,
            report.random_seed
        );
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_accepts_negative_values() {
        let cli = Cli::try_parse_from(["sortscope", "run", "quick", "3", "-1.5", "0"]).unwrap();
        match cli.command {
            Commands::Run {
                algorithm, input, ..
            } => {
                assert_eq!(algorithm, "quick");
                assert!(input.generate.is_none());
                assert_eq!(input.values(), vec![3.0, -1.5, 0.0]);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn run_generates_seeded_input() {
        let args = [
            "sortscope",
            "run",
            "heap",
            "--generate",
            "reversed",
            "--size",
            "6",
            "--seed",
            "3",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Run { input, .. } => {
                assert_eq!(input.generate, Some(Distribution::Reversed));
                assert_eq!(input.values(), vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn replay_generates_same_input_for_same_seed() {
        let parse = || {
            let cli = Cli::try_parse_from([
                "sortscope",
                "replay",
                "quick",
                "--generate",
                "few-unique",
                "--seed",
                "9",
            ])
            .unwrap();
            match cli.command {
                Commands::Replay { input, .. } => input.values(),
                _ => panic!("expected replay"),
            }
        };
        let values = parse();
        assert_eq!(values.len(), 20);
        assert!(values.iter().all(|&v| (1.0..=5.0).contains(&v)));
        assert_eq!(values, parse());
    }

    #[test]
    fn generate_rejects_values_and_unknown_shapes() {
        let rejected = [
            &["sortscope", "run", "quick", "1", "--generate", "random"][..],
            &["sortscope", "run", "quick", "--generate", "gaussian"],
            &["sortscope", "run", "quick", "--size", "4"],
        ];
        for args in rejected {
            assert!(Cli::try_parse_from(args).is_err(), "{:?}", args);
        }
    }

    #[test]
    fn verify_defaults() {
        let cli = Cli::try_parse_from(["sortscope", "verify"]).unwrap();
        match cli.command {
            Commands::Verify {
                iterations,
                seed,
                max_len,
                algorithm,
            } => {
                assert_eq!(iterations, 100);
                assert_eq!(seed, 0);
                assert_eq!(max_len, 32);
                assert!(algorithm.is_empty());
            }
            _ => panic!("expected verify"),
        }
    }

    #[test]
    fn explicit_max_len_wins() {
        let config = engine_config(Some(5), true);
        assert_eq!(config.max_len, Some(5));
        assert!(config.strict_ids);
    }

    #[test]
    fn verify_rejects_unknown_algorithm() {
        assert_eq!(run_verify(1, 0, 4, &["nope".to_string()]), 1);
    }
}

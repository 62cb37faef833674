//! duet CLI - compare iterative and recursive solutions of small numeric problems.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use duet_core::{DEFAULT_RECURSION_LIMIT, SessionReport};
use duet_eval::{render_json, render_text, ComparisonSession, EvaluatorConfig, DEFAULT_MAX_INPUT};
use duet_problems::{default_instances, ProblemInstance};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "duet")]
#[command(about = "Compare iterative and recursive strategies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    eval: EvalArgs,

    /// Log strategy runs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args, Debug, Clone, Copy)]
struct EvalArgs {
    /// Maximum nested frames a recursive strategy may open
    #[arg(long, global = true, default_value_t = DEFAULT_RECURSION_LIMIT)]
    recursion_limit: usize,

    /// Reject inputs whose magnitude exceeds this
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_INPUT)]
    max_input: u64,

    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare exp(7, 500), gcd(49, 28) and steps(22)
    Run,
    /// Compare base^power
    Exp {
        /// Base
        #[arg(allow_negative_numbers = true)]
        base: i64,
        /// Power
        #[arg(allow_negative_numbers = true)]
        power: i64,
    },
    /// Compare gcd(num1, num2)
    Gcd {
        /// First operand
        #[arg(allow_negative_numbers = true)]
        num1: i64,
        /// Second operand
        #[arg(allow_negative_numbers = true)]
        num2: i64,
    },
    /// Compare the number of ways to climb n stairs
    ///
    /// The recursive form is unmemoized and takes exponential time, so n is
    /// capped at 30 (about 31 million calls) regardless of --max-input.
    Steps {
        /// Number of stairs, at most 30
        n: u32,
    },
}

impl Commands {
    fn instances(&self) -> Vec<ProblemInstance> {
        match *self {
            Commands::Run => default_instances(),
            Commands::Exp { base, power } => vec![ProblemInstance::exponent(base, power)],
            Commands::Gcd { num1, num2 } => vec![ProblemInstance::gcd(num1, num2)],
            Commands::Steps { n } => vec![ProblemInstance::staircase(n)],
        }
    }
}

impl From<EvalArgs> for EvaluatorConfig {
    fn from(args: EvalArgs) -> Self {
        Self {
            recursion_limit: args.recursion_limit,
            max_input: args.max_input,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the session on a worker whose stack outlasts the recursion ceiling.
fn run_session(config: EvaluatorConfig, instances: Vec<ProblemInstance>) -> Result<SessionReport> {
    config.validate()?;

    let worker = std::thread::Builder::new()
        .name("duet-eval".to_string())
        .stack_size(config.worker_stack_size())
        .spawn(move || ComparisonSession::new(config)?.run(&instances))
        .context("failed to spawn evaluation thread")?;

    let report = worker
        .join()
        .map_err(|_| anyhow!("evaluation thread panicked"))??;
    Ok(report)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let instances = cli.command.as_ref().unwrap_or(&Commands::Run).instances();
    let config = EvaluatorConfig::from(cli.eval);

    info!("Comparing {} problems (recursion limit {})", instances.len(), config.recursion_limit);
    let report = run_session(config, instances)?;

    if cli.eval.json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}

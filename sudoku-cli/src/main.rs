use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;
use sudoku_engine::prelude::*;
use sudoku_variants::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "Sudoku Solver")]
#[command(about = "Sudoku variant solver utility.")]
#[command(version, long_about = None)]
struct Args {
    /// Givens as 81 characters in row-major order; 0 or any non-digit is an
    /// empty cell.
    #[arg(short, long)]
    givens: Option<String>,

    /// Add a constraint as name or name:options (repeatable).
    /// Use --list-constraints for the available names.
    #[arg(short = 'c', long = "constraint")]
    constraints: Vec<String>,

    /// Find the first solution (the default mode).
    #[arg(short, long)]
    solve: bool,

    /// Find a random solution.
    #[arg(short, long)]
    random: bool,

    /// Count solutions, stopping at the given cap (0 counts all).
    #[arg(long)]
    count: Option<usize>,

    /// Run the logical solver and print the deduction path.
    #[arg(short, long)]
    logical: bool,

    /// Reduce the grid to the candidates that appear in some solution.
    #[arg(long)]
    candidates: bool,

    /// Discover extra weak links before solving (slower start, stronger logic).
    #[arg(long)]
    discover_links: bool,

    /// Emit results as JSON.
    #[arg(long)]
    json: bool,

    /// List the available constraint names and exit.
    #[arg(long)]
    list_constraints: bool,
}

/// Machine-readable result shape for --json.
#[derive(Debug, Default, Serialize)]
struct Output {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exact: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn build_solver(args: &Args) -> Result<Solver, String> {
    let registry = ConstraintRegistry::standard();
    let mut builder = SolverBuilder::default().with_link_discovery(args.discover_links);

    for spec in &args.constraints {
        let (name, options) = match spec.split_once(':') {
            Some((name, options)) => (name, options),
            None => (spec.as_str(), ""),
        };
        let constraints = registry
            .create(name.trim(), options)
            .map_err(|err| err.to_string())?;
        for constraint in constraints {
            builder = builder.with_constraint(constraint);
        }
    }

    if let Some(givens) = &args.givens {
        builder = builder.with_givens_string(givens);
    }

    builder.build().map_err(|err| err.to_string())
}

/// Formats an 81-character grid string as nine rows.
fn pretty_grid(grid: &str) -> String {
    grid.chars()
        .enumerate()
        .flat_map(|(i, c)| {
            let newline = (i % SIZE == SIZE - 1 && i != NUM_CELLS - 1).then_some('\n');
            std::iter::once(c).chain(newline)
        })
        .collect()
}

fn run(args: &Args, solver: Solver) -> Output {
    let mut solver = solver;
    let mut output = Output::default();

    if args.logical {
        let result = solver.run_logical_solve(None);
        if let Some(desc) = result.description() {
            output.steps = desc.steps().iter().map(|step| step.to_string()).collect();
        }
        output.valid = !result.is_invalid() && !result.is_cancelled();
        if result.is_solved() {
            output.solution = Some(solver.board().to_string());
        }
        return output;
    }

    if let Some(maximum) = args.count {
        let result = solver.find_solution_count(maximum, None, None);
        match result {
            SolutionCountResult::Error(err) => output.error = Some(err),
            result => {
                output.count = result.count();
                output.exact = Some(result.is_exact_count());
                output.valid = result.count().unwrap_or(0) > 0;
            }
        }
        return output;
    }

    if args.candidates {
        match solver.find_true_candidates(None) {
            TrueCandidatesCountResult::None => output.valid = false,
            TrueCandidatesCountResult::Solved(board) => {
                output.valid = true;
                output.solution = Some(board.to_string());
            }
            TrueCandidatesCountResult::Candidates(board, _) => {
                output.valid = true;
                output.solution = Some(board.to_string());
            }
            TrueCandidatesCountResult::Error(err) => output.error = Some(err),
        }
        return output;
    }

    let result = if args.random {
        solver.find_random_solution(None)
    } else {
        solver.find_first_solution(None)
    };
    match result {
        SingleSolutionResult::Solved(board) => {
            output.valid = true;
            output.solution = Some(board.to_string());
        }
        SingleSolutionResult::None => output.valid = false,
        SingleSolutionResult::Error(err) => output.error = Some(err),
    }
    output
}

fn print_output(args: &Args, output: &Output) {
    if args.json {
        match serde_json::to_string_pretty(output) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("{} {}", "error:".red(), err),
        }
        return;
    }

    for step in &output.steps {
        println!("{}", step);
    }

    if let Some(err) = &output.error {
        eprintln!("{} {}", "error:".red(), err);
        return;
    }

    if let Some(count) = output.count {
        let qualifier = if output.exact == Some(true) { "exactly" } else { "at least" };
        println!("Found {} {} solution(s)", qualifier, count.to_string().cyan());
        return;
    }

    match &output.solution {
        Some(solution) => {
            println!("{}", "Solution:".green());
            println!("{}", pretty_grid(solution));
        }
        None if output.valid => println!("{}", "Done.".green()),
        None => println!("{}", "Puzzle has no solution.".red()),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    println!(
        "{} {}",
        "Sudoku Solver".green(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    if args.list_constraints {
        let registry = ConstraintRegistry::standard();
        println!("Available constraints:");
        for name in registry.names() {
            println!("  {}", name.cyan());
        }
        return ExitCode::SUCCESS;
    }

    let solver = match build_solver(&args) {
        Ok(solver) => solver,
        Err(err) => {
            eprintln!("{} {}", "error:".red(), err);
            return ExitCode::from(2);
        }
    };

    let output = run(&args, solver);
    print_output(&args, &output);

    if output.valid && output.error.is_none() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

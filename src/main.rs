use clap::Parser;
use exprsolve::{input::Operands, Solver, SolverConfig};
use log::{info, warn};
use rustyline::{error::ReadlineError, DefaultEditor, Result};

/// Find every distinct way to combine integers into a target value.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Number of operands in each puzzle
    #[arg(default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,
    /// Value the operands have to be combined into
    #[arg(default_value_t = 24, allow_negative_numbers = true)]
    target: i64,
}

impl Args {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            target: self.target as f64,
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut solver = Solver::new(args.config());
    let mut operands = Operands::new(args.count as usize);
    let target = solver.config().target;
    let mut rl = DefaultEditor::new()?;
    println!(
        "Give {} integer{} to work out {target}:",
        operands.count(),
        if operands.count() > 1 { "s" } else { "" },
    );
    println!();
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                for puzzle in operands.feed(line) {
                    match puzzle {
                        Ok(ns) => {
                            let values: Vec<f64> = ns.iter().map(|&n| n as f64).collect();
                            info!("solving {ns:?}");
                            let stats = solver.solve_with(&values, |solution| {
                                println!("{}={target}", solution.expr)
                            });
                            println!(
                                "[{} solution{}]",
                                stats.solutions,
                                if stats.solutions > 1 { "s" } else { "" }
                            );
                        }
                        Err(error) => {
                            warn!("{error:?}");
                            println!("[{error}]");
                        }
                    }
                    println!();
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(error) => Err(error)?,
        }
    }
    Ok(())
}

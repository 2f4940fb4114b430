mod cycle;
mod run;
mod vehicle;

use clap::{Parser, Subcommand};

pub use self::run::RunArgs;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Simulate the vehicle over a driving cycle and print the results.
    #[clap(name = "run")]
    Run(Box<RunArgs>),

    /// List the bundled driving cycles.
    #[clap(name = "cycles")]
    Cycles,
}

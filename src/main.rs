#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod driver;
mod reporter;
mod tables;

use clap::{Parser, crate_version};
use evsim::{core::cycle::DrivingCycle, prelude::*};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command},
    tables::build_cycles_table,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();

    match args.command {
        Command::Run(args) => {
            args.run().await?;
        }
        Command::Cycles => {
            println!("{}", build_cycles_table(&DrivingCycle::catalog()));
        }
    }

    info!("done!");
    Ok(())
}

// crashlens/src/main.rs

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug crashlens report ... to see the details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let project_dir = cli.project_dir;

    match cli.command {
        Commands::Fetch {
            limit,
            where_clause,
            output,
        } => commands::fetch::execute(project_dir, limit, where_clause, output).await,

        Commands::Load { file, table } => commands::load::execute(project_dir, file, table).await,

        Commands::Report { table, output } => {
            commands::report::execute(project_dir, table, output).await
        }

        Commands::Inspect { table, limit } => commands::inspect::execute(project_dir, table, limit),
    }
}

//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use espn_ffl_history::{
    cli::{default_packages, Commands, ESPN},
    commands::{
        fetch_history::{handle_fetch_history, Delays, FetchParams},
        list_outputs::handle_list_outputs,
        run_fetcher::handle_run,
    },
    core::logging::init_cli_logger,
    provision::ProvisionConfig,
    Result,
};

async fn dispatch(app: ESPN) -> Result<()> {
    match app.command {
        Commands::Run {
            interpreter,
            env_dir,
            entry_point,
            packages,
            work_dir,
        } => handle_run(ProvisionConfig {
            interpreter,
            env_dir,
            packages: packages.unwrap_or_else(default_packages),
            entry_point,
            work_dir,
        })?,

        Commands::Fetch {
            league_id,
            start_year,
            end_year,
            output_dir,
            refresh,
            request_delay_ms,
            season_delay_ms,
        } => {
            handle_fetch_history(FetchParams {
                league_id,
                start_year,
                end_year,
                output_dir,
                refresh,
                delays: Delays::from_millis(request_delay_ms, season_delay_ms),
                verbose: app.verbose,
            })
            .await?
        }

        Commands::Outputs { dir } => {
            handle_list_outputs(&dir);
        }
    }

    Ok(())
}

/// Run the CLI.
#[tokio::main]
async fn main() {
    let app = ESPN::parse();
    init_cli_logger(app.verbose);

    if let Err(e) = dispatch(app).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

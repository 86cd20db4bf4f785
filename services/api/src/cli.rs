use crate::report::{run_samples, run_scores, ScoresArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use feasibility::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Modular Feasibility Service",
    about = "Serve and inspect feasibility scores for prospective multifamily projects",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the feasibility scores for a project id and name
    Scores(ScoresArgs),
    /// List the curated sample projects that show reference scores
    Samples,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Scores(args) => run_scores(args),
        Command::Samples => {
            run_samples();
            Ok(())
        }
    }
}

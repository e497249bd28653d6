use crate::render::{run_evaluate, run_tracks, EvaluateArgs, TracksArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ideascope::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "IdeaScope",
    about = "Score ideas heuristically and serve the evaluation API",
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
    /// Evaluate a single idea and print the report
    Evaluate(EvaluateArgs),
    /// List the tracks with their detail field and recommendations
    Tracks(TracksArgs),
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
        Command::Evaluate(args) => run_evaluate(args).await,
        Command::Tracks(args) => run_tracks(args),
    }
}

use crate::commands::{
    run_assess, run_catalog, run_disclaimer, run_history, run_resources, AssessArgs, CatalogArgs,
    DisclaimerCommand, HistoryArgs, StateArgs,
};
use crate::server;
use addiction_insight::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Addiction Insight",
    about = "Score addiction warning-sign questionnaires and find help resources",
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
    /// Score a questionnaire and print the result
    Assess(AssessArgs),
    /// List the warning signs tracked for each reporting domain
    Catalog(CatalogArgs),
    /// Print emergency contacts, treatment resources, and intervention guidance
    Resources,
    /// Show previously recorded assessments
    History(HistoryArgs),
    /// Review or accept the usage disclaimer
    Disclaimer {
        #[command(subcommand)]
        command: DisclaimerCommand,
        #[command(flatten)]
        state: StateArgs,
    },
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Keep disclaimer and history in memory instead of the state file
    #[arg(long)]
    pub(crate) ephemeral: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Catalog(args) => run_catalog(args),
        Command::Resources => run_resources(),
        Command::History(args) => run_history(args),
        Command::Disclaimer { command, state } => run_disclaimer(command, state),
    }
}

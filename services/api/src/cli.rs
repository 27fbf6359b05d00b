use clap::{Args, Parser, Subcommand};
use mindmetrics::error::AppError;

use crate::demo::{run_bank_validation, run_demo, BankValidateArgs, DemoArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "MindMetrics Assessment Platform",
    about = "Run and demonstrate the MindMetrics assessment platform from the command line",
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
    /// Question-bank maintenance commands
    Bank {
        #[command(subcommand)]
        command: BankCommand,
    },
    /// Run an end-to-end CLI demo covering scoring, gating, and claims
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum BankCommand {
    /// Validate a CSV question-bank export without serving it
    Validate(BankValidateArgs),
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
        Command::Bank {
            command: BankCommand::Validate(args),
        } => run_bank_validation(args),
        Command::Demo(args) => run_demo(args),
    }
}

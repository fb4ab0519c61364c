use crate::diagnose::{run_diagnose, DiagnoseArgs};
use crate::members::{run_member_search, MemberSearchArgs};
use crate::server;
use behavior_lab::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Behavior Lab",
    about = "Serve and explore the behavior lab diagnostic, member directory, and advisor",
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
    /// Take the 18-question organizational behavior diagnostic
    Diagnose(DiagnoseArgs),
    /// Query the member directory
    Members {
        #[command(subcommand)]
        command: MembersCommand,
    },
}

#[derive(Subcommand, Debug)]
enum MembersCommand {
    /// Search members by keyword and tag
    Search(MemberSearchArgs),
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
        Command::Diagnose(args) => run_diagnose(args),
        Command::Members {
            command: MembersCommand::Search(args),
        } => run_member_search(args),
    }
}

mod cli;
mod diagnose;
mod infra;
mod members;
mod routes;
mod server;

use behavior_lab::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

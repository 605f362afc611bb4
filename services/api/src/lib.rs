mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use persona_theatre::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

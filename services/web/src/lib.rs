mod assess;
mod cli;
mod infra;
mod routes;
mod server;

use heart_score::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

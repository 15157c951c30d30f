use anyhow::Result;
use elitecabs::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}

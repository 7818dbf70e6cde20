use anyhow::Result;
use supportbot::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}

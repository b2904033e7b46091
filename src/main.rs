use anyhow::Result;
use stint::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    Cli::menu().await
}

mod cli;
mod collector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    // Credentials may come from a .env file next to the binary
    dotenvy::dotenv().ok();

    cli::run().await?;

    Ok(())
}

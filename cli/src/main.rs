use clap::Parser;
use presentation::cli::{Cli, CliApp};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    shared::telemetry::init_tracing(cli.log_level());
    let app = CliApp::new(&cli);
    app.run().await?;
    Ok(())
}

use std::io;

use anyhow::Result;
use clap::Parser;
use taskmancer::render::TaskListView;
use taskmancer::TaskApiClient;

#[derive(Parser)]
#[command(author, version, about = "Fetch the ranked task list from the prioritization server")]
struct Cli {
    /// Id of a task you have completed; repeat for several.
    /// With none given the server treats every dependency as unmet.
    #[arg(long = "completed", value_name = "ID")]
    completed: Vec<i64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let client = TaskApiClient::from_env();

    // Prioritize failures are log-only, nothing user-facing.
    match client.prioritize(&cli.completed).await {
        Ok(call) => {
            let mut view = TaskListView::new();
            view.apply(&call);
            view.write_to(&mut io::stdout())?;
        }
        Err(e) => {
            tracing::error!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

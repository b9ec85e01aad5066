use anyhow::Result;
use clap::Parser;
use taskmancer::TaskApiClient;

#[derive(Parser)]
#[command(author, version, about = "List every task stored on the prioritization server")]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let _cli = Cli::parse();
    let client = TaskApiClient::from_env();

    let tasks = client.get_tasks().await?;
    if tasks.is_empty() {
        println!("No tasks stored.");
        return Ok(());
    }

    for task in tasks {
        let deps = if task.dependencies.is_empty() {
            "none".to_string()
        } else {
            task.dependencies
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!(
            "#{} {} (due {}) status={} urgency={} normalized={} deps={}",
            task.id,
            task.name,
            task.deadline,
            task.status,
            task.urgency_score,
            task.normalized_urgency,
            deps
        );
    }

    Ok(())
}

use anyhow::Result;
use clap::Parser;
use taskmancer::form::{submit, SubmitOutcome, TaskForm};
use taskmancer::notify::ConsoleNotifier;
use taskmancer::TaskApiClient;

#[derive(Parser)]
#[command(author, version, about = "Add a task to the prioritization server")]
struct Cli {
    /// Task name
    #[arg(long)]
    name: String,

    /// Deadline, YYYY-MM-DD
    #[arg(long)]
    deadline: String,

    /// Urgency score (integer)
    #[arg(long)]
    urgency: String,

    /// Normalized urgency (0.0 to 1.0)
    #[arg(long)]
    normalized_urgency: String,

    /// Comma separated dependency task ids, e.g. "1,4,7"
    #[arg(long, default_value = "")]
    dependencies: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // The server parses deadlines as YYYY-MM-DD and scores anything else
    // as due immediately, so flag the mismatch up front.
    if chrono::NaiveDate::parse_from_str(&cli.deadline, "%Y-%m-%d").is_err() {
        tracing::warn!(
            "Deadline {:?} is not YYYY-MM-DD; the server will treat it as due now",
            cli.deadline
        );
    }

    let mut form = TaskForm {
        name: cli.name,
        deadline: cli.deadline,
        urgency: cli.urgency,
        normalized_urgency: cli.normalized_urgency,
        dependencies: cli.dependencies,
    };

    let client = TaskApiClient::from_env();
    let notifier = ConsoleNotifier;

    match submit(&client, &notifier, &mut form).await {
        SubmitOutcome::Created => Ok(()),
        SubmitOutcome::Silent => {
            tracing::warn!("Server replied without a confirmation message");
            Ok(())
        }
        SubmitOutcome::Failed => std::process::exit(1),
    }
}

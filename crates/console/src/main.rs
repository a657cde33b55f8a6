use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use console::{Board, HealthCheckForm, HttpClient, SubmitOutcome, render, render_form_errors};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "health-check", version, about = "Record and browse team health checks")]
struct Cli {
    /// Base URL of the health check API
    #[arg(long, env = "HEALTH_CHECK_URL", default_value = "http://localhost:3000", global = true)]
    url: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show recent health checks
    List,
    /// Submit a health check, then show the list
    Submit {
        #[arg(long)]
        name: String,
        /// One of the suggested feelings (see `feelings`) or any other label
        #[arg(long)]
        feeling: String,
        /// When the check applies, e.g. 2024-06-01T09:30 (defaults to now)
        #[arg(long)]
        date: Option<String>,
    },
    /// Print the suggested feelings
    Feelings,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (name, feeling, date) = match cli.cmd {
        Commands::Feelings => {
            for feeling in domain::FEELINGS {
                println!("{feeling}");
            }
            return Ok(());
        }
        Commands::List => {
            let client = HttpClient::new(&cli.url).context("building API client")?;
            let mut board = Board::new();
            print!("{}", render(&board));
            board.load(&client).await;
            print!("{}", render(&board));
            return finish(&board);
        }
        Commands::Submit {
            name,
            feeling,
            date,
        } => (name, feeling, date),
    };

    let mut form = HealthCheckForm::new(Utc::now());
    form.name = name;
    form.feeling = feeling;
    if let Some(date) = date {
        form.date = date;
    }

    let client = HttpClient::new(&cli.url).context("building API client")?;
    let mut board = Board::new();
    board.load(&client).await;

    match board.submit(&client, &mut form).await {
        SubmitOutcome::Invalid => {
            eprint!("{}", render_form_errors(&form));
            anyhow::bail!("health check not submitted");
        }
        SubmitOutcome::Submitted(record) => {
            tracing::info!(id = %record.id, "health check submitted");
        }
        SubmitOutcome::Busy | SubmitOutcome::Failed => {}
    }

    print!("{}", render(&board));
    finish(&board)
}

fn finish(board: &Board) -> anyhow::Result<()> {
    match board.error() {
        Some(error) => anyhow::bail!("{error}"),
        None => Ok(()),
    }
}

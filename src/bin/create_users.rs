use std::path::PathBuf;
use std::process;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use wikijs_admin::api::{self, GraphQlClient};
use wikijs_admin::config::Config;
use wikijs_admin::output::{self, creation_report_table, print_table};
use wikijs_admin::services::{create_users_from_csv, BatchError};

#[derive(Parser)]
#[command(
    name = "create-users",
    author,
    version,
    about = "Create Wiki.js users in bulk from a CSV file",
    long_about = r#"Create Wiki.js user accounts in bulk from a CSV file.

The file needs a header row with the columns
  name,email,password,groups,must_change_password,send_welcome_email

`groups` holds a list such as [1, 2] (defaults to [1]); the two flag columns
are true only when they contain "yes". Rows are created one at a time and a
summary table is printed at the end.

The endpoint and token are read from WIKI_API_URL and API_KEY (a .env file in
the working directory is loaded first)."#
)]
struct Cli {
    /// CSV file to import; prompts for it when omitted
    file: Option<PathBuf>,
    /// Path to .env file
    #[arg(long)]
    env_file: Option<String>,
    /// Disable colorized output
    #[arg(long)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long)]
    silent: bool,
}

async fn prompt_for_path() -> std::io::Result<PathBuf> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(format!("{} ", yansi::Paint::new("CSV file path:").bold()).as_bytes())
        .await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    Ok(PathBuf::from(line.trim()))
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }
    if cli.silent {
        api::set_silent(true);
    }

    let config = Config::from_env(cli.env_file.as_deref());
    let client = match GraphQlClient::new(config) {
        Ok(c) => c,
        Err(e) => {
            output::print_error(&format!("Failed to create HTTP client: {}", e));
            process::exit(1);
        }
    };

    println!("{}", yansi::Paint::new("Wiki.js bulk user creation").cyan().bold());

    let path = match cli.file {
        Some(p) => p,
        None => match prompt_for_path().await {
            Ok(p) => p,
            Err(e) => {
                output::print_error(&format!("Failed to read file path: {}", e));
                process::exit(1);
            }
        },
    };

    match create_users_from_csv(&client, &path).await {
        Ok(report) => {
            print_table("User creation results", creation_report_table(&report.outcomes));
            println!(
                "{} {}, {} {}",
                yansi::Paint::new(report.succeeded()).green().bold(),
                yansi::Paint::new("succeeded").green(),
                yansi::Paint::new(report.failed()).red().bold(),
                yansi::Paint::new("failed").red()
            );
        }
        Err(BatchError::NotFound(p)) => {
            output::print_error(&format!("Error: file not found → {}", p.display()));
            process::exit(1);
        }
        Err(e) => {
            output::print_error(&format!("Error: {}", e));
            process::exit(1);
        }
    }
}

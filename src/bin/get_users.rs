use std::process;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use wikijs_admin::api::{self, GraphQlClient};
use wikijs_admin::config::Config;
use wikijs_admin::output::{self, groups_table, print_table, users_table};
use wikijs_admin::services::load_directory;

#[derive(Parser)]
#[command(
    name = "get-users",
    author,
    version,
    about = "List Wiki.js users and groups",
    long_about = "Fetch every user and every group from the Wiki.js GraphQL API and print them as two tables sorted by ID. The endpoint and token are read from WIKI_API_URL and API_KEY."
)]
struct Cli {
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

    let directory = load_directory(&client).await;

    if directory.users.is_empty() {
        output::print_error("No users found.");
    } else {
        print_table("Users", users_table(&directory.users));
    }

    if directory.groups.is_empty() {
        output::print_error("No groups found.");
    } else {
        print_table("Groups", groups_table(&directory.groups));
    }
}

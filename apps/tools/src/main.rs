use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use shared::domain::{Role, Session};
use storage::{
    normalize_database_url, SessionStore, SqliteMedium, CURRENT_USER_KEY, DEFAULT_DATABASE_URL,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    /// Plain file paths are accepted and turned into `sqlite://` urls.
    #[arg(long, default_value = DEFAULT_DATABASE_URL)]
    database_url: String,
    #[arg(long, default_value = CURRENT_USER_KEY)]
    session_key: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    ShowSession,
    /// Write a session record directly, bypassing authentication.
    SeedSession {
        email: String,
        role: String,
    },
    ClearSession,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let database_url = normalize_database_url(&cli.database_url);
    let medium = SqliteMedium::new(&database_url)
        .await
        .with_context(|| format!("failed to open session storage at '{database_url}'"))?;
    let sessions = SessionStore::with_key(medium, cli.session_key);

    match cli.command {
        Command::ShowSession => match sessions.load().await {
            Some(session) => println!("{}", serde_json::to_string_pretty(&session)?),
            None => println!("no session stored under '{}'", sessions.key()),
        },
        Command::SeedSession { email, role } => {
            if role.trim().is_empty() {
                bail!("role must not be empty");
            }
            let session = Session::new(email, Role::parse(&role));
            if !sessions.save(&session).await {
                bail!("failed to store session under '{}'", sessions.key());
            }
            println!("stored session for {} ({})", session.email, session.role);
        }
        Command::ClearSession => {
            if !sessions.clear().await {
                bail!("failed to clear session under '{}'", sessions.key());
            }
            println!("cleared session under '{}'", sessions.key());
        }
    }

    Ok(())
}

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{menu_for, LoginOutcome, NavPhase, SessionOrchestrator};
use shared::{domain::Role, error::NavError};
use storage::{normalize_database_url, SessionStore, SqliteMedium};
use tracing_subscriber::EnvFilter;

mod auth;
mod config;
mod dashboards;
mod render;

use auth::ConfiguredAuth;
use render::{ConsoleNavigator, ConsoleNotifier};

#[derive(Parser, Debug)]
#[command(about = "Waste-management dashboard session console")]
struct Cli {
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Overrides the database url from config and environment.
    #[arg(long)]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Restore any persisted session and show the resulting screen.
    Start,
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        role: String,
    },
    Logout,
    Whoami,
    /// Check whether the signed-in role satisfies `required`.
    Can {
        required: String,
    },
    /// List sidebar sections for a role, or for the signed-in role.
    Menu {
        #[arg(long)]
        role: Option<String>,
    },
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

    let settings = config::load_settings(&cli.config);
    let database_url =
        normalize_database_url(cli.database_url.as_deref().unwrap_or(&settings.database_url));
    let medium = SqliteMedium::new(&database_url)
        .await
        .with_context(|| format!("failed to open session storage at '{database_url}'"))?;

    let navigator = Arc::new(ConsoleNavigator::default());
    let orchestrator = SessionOrchestrator::builder()
        .sessions(SessionStore::with_key(medium, settings.session_key.clone()))
        .auth(Arc::new(ConfiguredAuth::new(settings.accounts.clone())))
        .dashboards(dashboards::registry())
        .notifier(Arc::new(ConsoleNotifier))
        .navigator(navigator.clone())
        .build()
        .context("failed to assemble session orchestrator")?;

    let phase = orchestrator.startup().await?;

    match cli.command {
        Command::Start => {}
        Command::Login {
            email,
            password,
            role,
        } => match orchestrator.login(&email, &password, role).await {
            Ok(LoginOutcome::Authenticated(session)) => {
                println!("Signed in as {} ({})", session.email, session.role);
            }
            Ok(LoginOutcome::Rejected) => {}
            Err(NavError::AlreadyAuthenticated { email }) => {
                println!("Already signed in as {email}; log out first");
            }
            Err(err) => return Err(err.into()),
        },
        Command::Logout => {
            if phase == NavPhase::Unauthenticated {
                println!("Not signed in");
            }
            orchestrator.logout().await?;
        }
        Command::Whoami => {
            match orchestrator.session().await {
                Some(session) => println!("{} ({})", session.email, session.role),
                None => println!("Not signed in"),
            }
            return Ok(());
        }
        Command::Can { required } => {
            let required = Role::parse(&required);
            let verdict = if orchestrator.can(&required).await {
                "allowed"
            } else {
                "denied"
            };
            println!("{required}: {verdict}");
            return Ok(());
        }
        Command::Menu { role } => {
            let role = match role {
                Some(role) => Role::parse(&role),
                None => match orchestrator.session().await {
                    Some(session) => session.role,
                    None => {
                        println!("Not signed in; pass --role");
                        return Ok(());
                    }
                },
            };
            for item in menu_for(&role) {
                println!("{:<12} {:<20} requires {}", item.section, item.label, item.required_role);
            }
            return Ok(());
        }
    }

    let session = orchestrator.session().await;
    print!(
        "{}",
        render::render_layout(&orchestrator.screens().await, session.as_ref(), &navigator.items())
    );
    Ok(())
}

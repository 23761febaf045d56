//! crmctl - admin CLI for the CRM backend.
//!
//! Main entry point: parses the command line, resolves configuration from
//! flags and environment, and dispatches to the command handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{contact, note, user, Context};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Admin CLI for the CRM backend
///
/// Manages users, their contacts, and contact notes. Select a user with
/// `crmctl user select <id>` and contact/note commands no longer need
/// `--user-id`; `crmctl user exit` returns to explicit addressing.
#[derive(Parser)]
#[command(name = "crmctl")]
#[command(author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Backend URL; the path component is the API root
    #[arg(long, global = true, env = "CRM_BACKEND_URL")]
    pub server: Option<String>,

    /// Bearer token for admin calls
    #[arg(long, global = true, env = "CRM_ADMIN_API_KEY", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage users and the user selection
    User(user::UserArgs),

    /// Manage a user's contacts
    Contact(contact::ContactArgs),

    /// Manage notes on a user's contacts
    Note(note::NoteArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

// One request at a time, so a single-threaded runtime is all the binary needs.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "crmctl=debug,crmctl_client=debug,info"
    } else {
        "crmctl=info,crmctl_client=info,warn"
    };
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let ctx = Context {
        server_url: cli
            .server
            .unwrap_or_else(|| crmctl_client::DEFAULT_BASE_URL.to_string()),
        token: cli.token.unwrap_or_default(),
        json_output: cli.json,
        verbose: cli.verbose,
    };
    tracing::debug!(server = %ctx.server_url, "resolved backend");

    match cli.command {
        Commands::User(args) => user::run(args, &ctx).await,
        Commands::Contact(args) => contact::run(args, &ctx).await,
        Commands::Note(args) => note::run(args, &ctx).await,
    }
}

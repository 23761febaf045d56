//! User commands - account management and the user selection.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::{style, Style};
use crmctl_client::{Selection, SelectionStore};

use super::Context;

/// Arguments for the user command.
#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Create a new user
    Create {
        /// Login name
        username: String,

        /// Password
        password: String,
    },

    /// List all users
    List,

    /// Show one user
    Get {
        /// User ID
        id: String,
    },

    /// Select a user; contact and note commands then default to it
    Select {
        /// User ID
        id: String,
    },

    /// Exit user selection mode
    Exit,

    /// Show the selected user and its contacts and notes
    Info,
}

/// Run the user command.
pub async fn run(args: UserArgs, ctx: &Context) -> Result<()> {
    let dim = Style::new().dim();
    let green = Style::new().green();
    let store = SelectionStore::new();

    match args.command {
        UserCommand::Create { username, password } => {
            let user = super::client(ctx)?
                .users()
                .create(&username, &password)
                .await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&user)?);
                return Ok(());
            }
            println!(
                "{} User '{}' created (id: {})",
                green.apply_to("✓"),
                user.username,
                user.id
            );
            println!(
                "{}",
                dim.apply_to(format!(
                    "Select it to work with its data: crmctl user select {}",
                    user.id
                ))
            );
        }

        UserCommand::List => {
            let users = super::client(ctx)?.users().list().await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&users)?);
                return Ok(());
            }
            if users.is_empty() {
                println!("No users found.");
                return Ok(());
            }

            let selected = store.load()?;
            if let Some(selection) = &selected {
                println!(
                    "Currently selected: {} ({})",
                    selection.username, selection.user_id
                );
                println!();
            }

            println!("{}", style("Users").bold());
            println!("{}", dim.apply_to("─".repeat(50)));
            println!("{:<36} | {}", "ID", "Username");
            for user in &users {
                let marker = match &selected {
                    Some(selection) if selection.user_id == user.id => " ← selected",
                    _ => "",
                };
                println!(
                    "{:<36} | {}{}",
                    user.id,
                    user.username,
                    dim.apply_to(marker)
                );
            }
        }

        UserCommand::Get { id } => {
            let user = super::client(ctx)?.users().get(&id).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&user)?);
                return Ok(());
            }
            println!("ID:       {}", user.id);
            println!("Username: {}", user.username);
        }

        UserCommand::Select { id } => {
            // Resolve the real username before persisting; selecting a user
            // the backend does not know is refused here.
            let user = super::client(ctx)?.users().get(&id).await?;
            store.save(&Selection {
                user_id: user.id.clone(),
                username: user.username.clone(),
            })?;
            println!(
                "{} Selected user {} ({})",
                green.apply_to("✓"),
                user.username,
                user.id
            );
            println!(
                "{}",
                dim.apply_to(
                    "Contact and note commands now default to this user; \
                     run `crmctl user exit` to leave."
                )
            );
        }

        UserCommand::Exit => {
            if !store.exists() {
                println!("No user is currently selected.");
                return Ok(());
            }
            let selection = store.load()?;
            store.clear()?;
            match selection {
                Some(selection) => println!(
                    "{} Exited user mode for {}",
                    green.apply_to("✓"),
                    selection.username
                ),
                None => println!("{} Exited user mode", green.apply_to("✓")),
            }
            println!("{}", dim.apply_to("Operations need --user-id again."));
        }

        UserCommand::Info => {
            let Some(selection) = store.load()? else {
                println!("No user currently selected.");
                println!("{}", dim.apply_to("Use `crmctl user select <id>` to select one."));
                return Ok(());
            };

            let client = super::client(ctx)?;
            let contacts = client.contacts().list(None).await?;
            let notes = client.notes().list(None).await?;

            if ctx.json_output {
                let summary = serde_json::json!({
                    "selection": selection,
                    "contacts": contacts,
                    "notes": notes,
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(());
            }

            println!(
                "{}",
                style(format!(
                    "Selected user: {} ({})",
                    selection.username, selection.user_id
                ))
                .bold()
            );
            println!("{}", dim.apply_to("─".repeat(50)));
            println!();

            println!("Contacts ({}):", contacts.len());
            if contacts.is_empty() {
                println!("{}", dim.apply_to("  none"));
            }
            for contact in &contacts {
                match &contact.company {
                    Some(company) => println!("  {}. {} ({})", contact.id, contact.name, company),
                    None => println!("  {}. {}", contact.id, contact.name),
                }
            }
            println!();

            println!("Notes ({}):", notes.len());
            if notes.is_empty() {
                println!("{}", dim.apply_to("  none"));
            }
            for note in &notes {
                println!("  {}. {}", note.id, note.title);
            }
        }
    }

    Ok(())
}

//! Note commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::{style, Style};
use crmctl_client::NoteRequest;

use super::Context;

/// Arguments for the note command.
#[derive(Args, Debug)]
pub struct NoteArgs {
    #[command(subcommand)]
    pub command: NoteCommand,
}

#[derive(Subcommand, Debug)]
pub enum NoteCommand {
    /// Create a new note
    Create {
        /// Note title
        title: String,

        /// Free-form description
        description: Option<String>,

        /// Contacts this note belongs to (comma-separated ids)
        #[arg(long = "contact-ids", value_delimiter = ',', required = true)]
        contact_ids: Vec<i64>,

        /// Owning user id (defaults to the selected user)
        #[arg(long = "user-id")]
        user_id: Option<String>,
    },

    /// List notes
    List {
        /// User whose notes to list (defaults to the selected user)
        #[arg(long = "user-id")]
        user_id: Option<String>,
    },

    /// Show one note
    Get {
        /// Note ID
        id: i64,

        #[arg(long = "user-id")]
        user_id: Option<String>,
    },

    /// Update a note
    Update {
        /// Note ID
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// Replacement contact ids (comma-separated)
        #[arg(long = "contact-ids", value_delimiter = ',')]
        contact_ids: Option<Vec<i64>>,

        #[arg(long = "user-id")]
        user_id: Option<String>,
    },

    /// Delete a note
    Delete {
        /// Note ID
        id: i64,

        #[arg(long = "user-id")]
        user_id: Option<String>,
    },
}

/// Run the note command.
pub async fn run(args: NoteArgs, ctx: &Context) -> Result<()> {
    let dim = Style::new().dim();
    let green = Style::new().green();
    let client = super::client(ctx)?;

    match args.command {
        NoteCommand::Create {
            title,
            description,
            contact_ids,
            user_id,
        } => {
            let request = NoteRequest {
                contact_ids,
                title,
                description,
            };
            let note = client.notes().create(user_id.as_deref(), &request).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&note)?);
                return Ok(());
            }
            println!(
                "{} Note '{}' created (id: {})",
                green.apply_to("✓"),
                note.title,
                note.id
            );
            if let Some(description) = &note.description {
                println!("  Description: {description}");
            }
            println!("  Contacts: {}", join_ids(&note.contact_ids));
        }

        NoteCommand::List { user_id } => {
            let notes = client.notes().list(user_id.as_deref()).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&notes)?);
                return Ok(());
            }
            if notes.is_empty() {
                println!("No notes found.");
                return Ok(());
            }

            println!("{}", style("Notes").bold());
            println!("{}", dim.apply_to("─".repeat(88)));
            println!(
                "{:<5} | {:<25} | {:<30} | {:<15} | {}",
                "ID", "Title", "Description", "Contact IDs", "User ID"
            );
            for note in &notes {
                println!(
                    "{:<5} | {:<25} | {:<30} | {:<15} | {}",
                    note.id,
                    truncate(&note.title, 25),
                    truncate(note.description.as_deref().unwrap_or(""), 30),
                    truncate(&join_ids(&note.contact_ids), 15),
                    note.user_id,
                );
            }
            if ctx.verbose {
                println!();
                println!("{}", dim.apply_to(format!("Server: {}", ctx.server_url)));
            }
        }

        NoteCommand::Get { id, user_id } => {
            let note = client.notes().get(user_id.as_deref(), id).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&note)?);
                return Ok(());
            }
            println!("ID:          {}", note.id);
            println!("Title:       {}", note.title);
            if let Some(description) = &note.description {
                println!("Description: {description}");
            }
            println!("Contacts:    {}", join_ids(&note.contact_ids));
            println!("User ID:     {}", note.user_id);
        }

        NoteCommand::Update {
            id,
            title,
            description,
            contact_ids,
            user_id,
        } => {
            // PUT replaces the whole note, so read the current state and
            // merge the provided fields into it.
            let user = user_id.as_deref();
            let current = client.notes().get(user, id).await?;
            let request = NoteRequest {
                contact_ids: contact_ids.unwrap_or(current.contact_ids),
                title: title.unwrap_or(current.title),
                description: description.or(current.description),
            };
            let note = client.notes().update(user, id, &request).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&note)?);
                return Ok(());
            }
            println!(
                "{} Note {} updated: {}",
                green.apply_to("✓"),
                note.id,
                note.title
            );
        }

        NoteCommand::Delete { id, user_id } => {
            client.notes().delete(user_id.as_deref(), id).await?;
            println!("{} Note {} deleted", green.apply_to("✓"), id);
        }
    }

    Ok(())
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Clip a table cell to `max_len` characters, marking the cut with an
/// ellipsis.
fn truncate(s: &str, max_len: usize) -> String {
    let s = s.replace('\n', " ");
    if s.chars().count() <= max_len {
        s
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("short", 30), "short");
    }

    #[test]
    fn truncate_clips_long_strings() {
        let long = "a".repeat(40);
        let clipped = truncate(&long, 30);
        assert_eq!(clipped.chars().count(), 30);
        assert!(clipped.ends_with("..."));
    }

    #[test]
    fn truncate_flattens_newlines() {
        assert_eq!(truncate("line one\nline two", 30), "line one line two");
    }

    #[test]
    fn join_ids_is_comma_separated() {
        assert_eq!(join_ids(&[1, 2, 3]), "1,2,3");
        assert_eq!(join_ids(&[]), "");
    }
}

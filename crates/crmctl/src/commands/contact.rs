//! Contact commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::{style, Style};
use crmctl_client::{ContactRequest, SelectionStore};

use super::Context;

/// Arguments for the contact command.
#[derive(Args, Debug)]
pub struct ContactArgs {
    #[command(subcommand)]
    pub command: ContactCommand,
}

#[derive(Subcommand, Debug)]
pub enum ContactCommand {
    /// Create a new contact
    Create {
        /// Contact name
        name: String,

        /// Company name
        #[arg(long)]
        company: Option<String>,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Contact email
        #[arg(long)]
        email: Option<String>,

        /// Owning user id (defaults to the selected user)
        #[arg(long = "user-id")]
        user_id: Option<String>,
    },

    /// List contacts
    List {
        /// User whose contacts to list (defaults to the selected user)
        #[arg(long = "user-id")]
        user_id: Option<String>,
    },

    /// Show one contact
    Get {
        /// Contact ID
        id: i64,

        #[arg(long = "user-id")]
        user_id: Option<String>,
    },

    /// List the notes attached to a contact
    Notes {
        /// Contact ID
        id: i64,

        #[arg(long = "user-id")]
        user_id: Option<String>,
    },
}

/// Run the contact command.
pub async fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let dim = Style::new().dim();
    let green = Style::new().green();
    let client = super::client(ctx)?;

    match args.command {
        ContactCommand::Create {
            name,
            company,
            phone,
            email,
            user_id,
        } => {
            let request = ContactRequest {
                name,
                company,
                phone_number: phone,
                contact_email: email,
            };
            let contact = client
                .contacts()
                .create(user_id.as_deref(), &request)
                .await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&contact)?);
                return Ok(());
            }
            println!(
                "{} Contact '{}' created (id: {})",
                green.apply_to("✓"),
                contact.name,
                contact.id
            );
            if let Some(company) = &contact.company {
                println!("  Company: {company}");
            }
            if let Some(phone) = &contact.phone_number {
                println!("  Phone:   {phone}");
            }
            if let Some(email) = &contact.contact_email {
                println!("  Email:   {email}");
            }
            println!(
                "{}",
                dim.apply_to(format!(
                    "Attach notes with: crmctl note create \"Title\" --contact-ids {}",
                    contact.id
                ))
            );
        }

        ContactCommand::List { user_id } => {
            let contacts = client.contacts().list(user_id.as_deref()).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&contacts)?);
                return Ok(());
            }

            match target_label(user_id.as_deref())? {
                Some(label) => println!("{}", style(format!("Contacts for {label}")).bold()),
                None => println!("{}", style("Contacts").bold()),
            }
            if contacts.is_empty() {
                println!("{}", dim.apply_to("No contacts found."));
                return Ok(());
            }

            println!("{}", dim.apply_to("─".repeat(80)));
            println!(
                "{:<5} | {:<20} | {:<15} | {:<15} | {}",
                "ID", "Name", "Company", "Phone", "Email"
            );
            for contact in &contacts {
                println!(
                    "{:<5} | {:<20} | {:<15} | {:<15} | {}",
                    contact.id,
                    contact.name,
                    contact.company.as_deref().unwrap_or(""),
                    contact.phone_number.as_deref().unwrap_or(""),
                    contact.contact_email.as_deref().unwrap_or(""),
                );
            }
        }

        ContactCommand::Get { id, user_id } => {
            let contact = client.contacts().get(user_id.as_deref(), id).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&contact)?);
                return Ok(());
            }
            println!("ID:      {}", contact.id);
            println!("Name:    {}", contact.name);
            println!("User ID: {}", contact.user_id);
            if let Some(company) = &contact.company {
                println!("Company: {company}");
            }
            if let Some(phone) = &contact.phone_number {
                println!("Phone:   {phone}");
            }
            if let Some(email) = &contact.contact_email {
                println!("Email:   {email}");
            }
        }

        ContactCommand::Notes { id, user_id } => {
            let notes = client.contacts().notes(user_id.as_deref(), id).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&notes)?);
                return Ok(());
            }
            println!("{}", style(format!("Notes for contact {id}")).bold());
            if notes.is_empty() {
                println!("{}", dim.apply_to("No notes found."));
                return Ok(());
            }
            for note in &notes {
                match &note.description {
                    Some(description) => println!(
                        "  {}. {} {}",
                        note.id,
                        note.title,
                        dim.apply_to(format!("- {description}"))
                    ),
                    None => println!("  {}. {}", note.id, note.title),
                }
            }
        }
    }

    Ok(())
}

/// Label for the user a listing is scoped to: the explicit id when one was
/// given, otherwise the persisted selection.
fn target_label(explicit: Option<&str>) -> Result<Option<String>> {
    if let Some(id) = explicit.filter(|id| !id.is_empty()) {
        return Ok(Some(format!("user {id}")));
    }
    let selection = SelectionStore::new().load()?;
    Ok(selection.map(|s| format!("{} ({})", s.username, s.user_id)))
}

//! CLI command handlers.

pub mod contact;
pub mod note;
pub mod user;

use anyhow::Result;
use crmctl_client::{CrmClient, SelectionStore};

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Backend URL to connect to.
    pub server_url: String,
    /// Bearer token; empty when unset.
    pub token: String,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

/// Build a client for `ctx`, routing flag-free requests through any persisted
/// selection.
pub(crate) fn client(ctx: &Context) -> Result<CrmClient> {
    let selection = SelectionStore::new().load()?;
    let client = CrmClient::builder()
        .base_url(ctx.server_url.as_str())
        .auth_token(ctx.token.as_str())
        .selection(selection)
        .build()?;
    Ok(client)
}

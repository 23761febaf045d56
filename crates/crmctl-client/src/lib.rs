//! HTTP client SDK for the CRM admin backend.
//!
//! This crate provides a typed client for the backend's user, contact, and
//! note endpoints, plus the persisted user selection that powers contextual
//! addressing: once a user is selected, contact and note calls may omit the
//! user id and are routed through a shortcut base precomputed from the
//! selection. An explicit id always overrides the selection.
//!
//! # Example
//!
//! ```no_run
//! use crmctl_client::{CrmClient, SelectionStore, Result};
//!
//! # async fn example() -> Result<()> {
//! let selection = SelectionStore::new().load()?;
//! let client = CrmClient::builder()
//!     .base_url("http://localhost:8082/api")
//!     .auth_token("secret")
//!     .selection(selection)
//!     .build()?;
//!
//! // Explicit addressing: names the user directly.
//! let contacts = client.contacts().list(Some("42")).await?;
//!
//! // Contextual addressing: falls back to the selected user, and fails
//! // with an unresolved-user error when nothing is selected.
//! let notes = client.notes().list(None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Users**: create (header-id special case), list, get
//! - **Contacts**: create, list, get, notes-for-contact
//! - **Notes**: create, list, get, replace, delete
//! - **Selection**: save, load, clear, exists on the working-directory file

pub mod api;
pub mod client;
pub mod error;
pub mod selection;
pub mod types;

mod route;

pub use client::{ClientBuilder, CrmClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use selection::{Selection, SelectionStore, SELECTION_FILE};
pub use types::*;

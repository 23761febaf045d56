//! Contacts API.
//!
//! All operations are user-scoped: `user` is an optional explicit user id,
//! and `None` (or an empty id) falls back to the selected user.

use crate::client::CrmClient;
use crate::error::Result;
use crate::types::{Contact, ContactRequest, Note};

/// Contacts API client.
pub struct ContactsApi {
    client: CrmClient,
}

impl ContactsApi {
    pub(crate) fn new(client: CrmClient) -> Self {
        Self { client }
    }

    /// Create a contact for the target user.
    pub async fn create(&self, user: Option<&str>, request: &ContactRequest) -> Result<Contact> {
        let url = self.client.user_url(user, "contacts")?;
        self.client.post(url, request).await
    }

    /// List the target user's contacts.
    pub async fn list(&self, user: Option<&str>) -> Result<Vec<Contact>> {
        let url = self.client.user_url(user, "contacts")?;
        self.client.get(url).await
    }

    /// Get one contact by id.
    pub async fn get(&self, user: Option<&str>, contact_id: i64) -> Result<Contact> {
        let url = self
            .client
            .user_url(user, &format!("contacts/{contact_id}"))?;
        self.client.get(url).await
    }

    /// List the notes attached to one contact.
    pub async fn notes(&self, user: Option<&str>, contact_id: i64) -> Result<Vec<Note>> {
        let url = self
            .client
            .user_url(user, &format!("contacts/{contact_id}/notes"))?;
        self.client.get(url).await
    }
}

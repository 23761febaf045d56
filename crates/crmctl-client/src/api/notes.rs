//! Notes API.
//!
//! Notes hang off the target user's contacts collection; like contacts, every
//! operation takes an optional explicit user id and otherwise routes through
//! the selection.

use crate::client::CrmClient;
use crate::error::Result;
use crate::types::{Note, NoteRequest};

/// Notes API client.
pub struct NotesApi {
    client: CrmClient,
}

impl NotesApi {
    pub(crate) fn new(client: CrmClient) -> Self {
        Self { client }
    }

    /// Create a note for the target user.
    pub async fn create(&self, user: Option<&str>, request: &NoteRequest) -> Result<Note> {
        let url = self.client.user_url(user, "contacts/notes")?;
        self.client.post(url, request).await
    }

    /// List the target user's notes.
    pub async fn list(&self, user: Option<&str>) -> Result<Vec<Note>> {
        let url = self.client.user_url(user, "contacts/notes")?;
        self.client.get(url).await
    }

    /// Get one note by id.
    pub async fn get(&self, user: Option<&str>, note_id: i64) -> Result<Note> {
        let url = self
            .client
            .user_url(user, &format!("contacts/notes/{note_id}"))?;
        self.client.get(url).await
    }

    /// Replace a note. The body is the full new state, not a partial patch.
    pub async fn update(
        &self,
        user: Option<&str>,
        note_id: i64,
        request: &NoteRequest,
    ) -> Result<Note> {
        let url = self
            .client
            .user_url(user, &format!("contacts/notes/{note_id}"))?;
        self.client.put(url, request).await
    }

    /// Delete a note.
    pub async fn delete(&self, user: Option<&str>, note_id: i64) -> Result<()> {
        let url = self
            .client
            .user_url(user, &format!("contacts/notes/{note_id}"))?;
        self.client.delete(url).await
    }
}

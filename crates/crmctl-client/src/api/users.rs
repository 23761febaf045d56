//! Users API.

use crate::client::CrmClient;
use crate::error::Result;
use crate::types::{CreateUserRequest, User};

/// Users API client.
///
/// User endpoints live directly under the API root and are not routed through
/// the selection.
pub struct UsersApi {
    client: CrmClient,
}

impl UsersApi {
    pub(crate) fn new(client: CrmClient) -> Self {
        Self { client }
    }

    /// Create a user.
    ///
    /// The backend returns the new identifier in the `id` response header,
    /// not the body; a response without that header is malformed.
    pub async fn create(&self, username: &str, password: &str) -> Result<User> {
        let url = self.client.url("user")?;
        let request = CreateUserRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let id = self.client.post_for_header_id(url, &request).await?;
        Ok(User {
            id,
            username: username.to_string(),
        })
    }

    /// List all users.
    pub async fn list(&self) -> Result<Vec<User>> {
        let url = self.client.url("user")?;
        self.client.get(url).await
    }

    /// Get a user by id.
    pub async fn get(&self, id: &str) -> Result<User> {
        let url = self.client.url(&format!("user/{id}"))?;
        self.client.get(url).await
    }
}

//! API endpoint implementations.

mod contacts;
mod notes;
mod users;

pub use contacts::ContactsApi;
pub use notes::NotesApi;
pub use users::UsersApi;

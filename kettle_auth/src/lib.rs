/*
  Credentials - an account name and the stored password (plain or bcrypt)
  Store - looks credentials up by account. Shared by every request handler
  Login - the handler that either serves the login page or checks a posted form
*/

pub mod config;
pub mod credential;
pub mod login;
pub mod store;

pub use config::LoginConfig;
pub use credential::{Credential, CredentialStore, Lookup};
pub use login::LoginHandler;
pub use store::InMemoryCredentialStore;

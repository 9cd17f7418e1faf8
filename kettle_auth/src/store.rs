use std::collections::HashMap;
use std::io::Read;
use std::sync::{PoisonError, RwLock};

use log::debug;
use thiserror::Error;

use crate::credential::{Credential, CredentialStore, Lookup};

pub const DEFAULT_ACCOUNT: &str = "gugu";
pub const DEFAULT_PASSWORD: &str = "password";

#[derive(Debug, Error)]
pub enum CredentialError {
  #[error("failed to read credentials: {0}")]
  DeserializeError(#[from] serde_json::Error),
}

/// Credentials held in memory, keyed by account name.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
  credentials: RwLock<HashMap<String, Credential>>,
}

impl InMemoryCredentialStore {
  pub fn new() -> InMemoryCredentialStore {
    InMemoryCredentialStore::default()
  }

  // seeded with the single demo account
  pub fn with_defaults() -> InMemoryCredentialStore {
    let store = InMemoryCredentialStore::new();
    store.save(Credential::plain(DEFAULT_ACCOUNT, DEFAULT_PASSWORD));
    store
  }

  // expects a json array of {"account", "password"} or {"account", "password_hash"} objects
  pub fn from_json_reader<R: Read>(reader: R) -> Result<InMemoryCredentialStore, CredentialError> {
    let credentials = serde_json::from_reader::<_, Vec<Credential>>(reader)?;
    let store = InMemoryCredentialStore::new();
    for credential in credentials {
      store.save(credential);
    }
    Ok(store)
  }

  // replaces any credential already saved under the same account
  pub fn save(&self, credential: Credential) {
    debug!("saving credential for {}", credential.account);
    let mut credentials = self.credentials.write().unwrap_or_else(PoisonError::into_inner);
    credentials.insert(credential.account.clone(), credential);
  }

  pub fn len(&self) -> usize {
    self.credentials.read().unwrap_or_else(PoisonError::into_inner).len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl CredentialStore for InMemoryCredentialStore {
  fn find_by_account(&self, account: &str) -> Lookup {
    let credentials = self.credentials.read().unwrap_or_else(PoisonError::into_inner);
    Lookup::from(credentials.get(account).cloned())
  }
}

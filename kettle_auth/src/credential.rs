use log::warn;
use serde::Deserialize;

/*
  A Credential is the account name plus whatever the store keeps of the password.
  Stores may keep plain text (seed data, tests) or a bcrypt hash.
*/

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StoredPassword {
  Bcrypt { password_hash: String },
  Plain { password: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Credential {
  pub account: String,
  #[serde(flatten)]
  pub password: StoredPassword,
}

impl Credential {
  pub fn plain(account: &str, password: &str) -> Credential {
    Credential {
      account: account.to_owned(),
      password: StoredPassword::Plain {
        password: password.to_owned(),
      },
    }
  }

  pub fn hashed(account: &str, password_hash: &str) -> Credential {
    Credential {
      account: account.to_owned(),
      password: StoredPassword::Bcrypt {
        password_hash: password_hash.to_owned(),
      },
    }
  }

  pub fn check_password(&self, candidate: &str) -> bool {
    match &self.password {
      StoredPassword::Plain { password } => password == candidate,
      StoredPassword::Bcrypt { password_hash } => match bcrypt::verify(candidate, password_hash) {
        Ok(matches) => matches,
        Err(error) => {
          // a corrupt hash never authenticates anybody
          warn!("unreadable password hash for {}: {}", self.account, error);
          false
        }
      },
    }
  }
}

/// Result of looking an account up. Absence is a normal answer, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
  Found(Credential),
  NotFound,
}

impl From<Option<Credential>> for Lookup {
  fn from(credential: Option<Credential>) -> Lookup {
    match credential {
      Some(credential) => Lookup::Found(credential),
      None => Lookup::NotFound,
    }
  }
}

// shared across concurrent requests, so implementations handle their own locking
pub trait CredentialStore: Send + Sync {
  fn find_by_account(&self, account: &str) -> Lookup;
}

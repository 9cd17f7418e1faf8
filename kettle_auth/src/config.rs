use std::env;

use log::debug;
use thiserror::Error;

pub const SUCCESS_PATH_VAR: &str = "LOGIN_SUCCESS_PATH";
pub const FAILURE_PATH_VAR: &str = "LOGIN_FAILURE_PATH";
pub const DEFAULT_SUCCESS_PATH: &str = "/index.html";
pub const DEFAULT_FAILURE_PATH: &str = "/401.html";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("{0} must be an absolute path starting with '/', got {1:?}")]
  BadRedirectPath(&'static str, String),
}

/// Where the login flow sends the browser afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginConfig {
  pub success_path: String,
  pub failure_path: String,
}

impl Default for LoginConfig {
  fn default() -> LoginConfig {
    LoginConfig {
      success_path: DEFAULT_SUCCESS_PATH.to_owned(),
      failure_path: DEFAULT_FAILURE_PATH.to_owned(),
    }
  }
}

impl LoginConfig {
  // loads .env if there is one, then reads the redirect paths from the environment.
  // unset variables keep their defaults
  pub fn from_env() -> Result<LoginConfig, ConfigError> {
    if let Ok(path) = dotenv::dotenv() {
      debug!("loaded environment from {}", path.display());
    }
    LoginConfig::from_vars(env::var(SUCCESS_PATH_VAR).ok(), env::var(FAILURE_PATH_VAR).ok())
  }

  fn from_vars(success: Option<String>, failure: Option<String>) -> Result<LoginConfig, ConfigError> {
    let defaults = LoginConfig::default();
    let config = LoginConfig {
      success_path: success.unwrap_or(defaults.success_path),
      failure_path: failure.unwrap_or(defaults.failure_path),
    };
    validate_path(SUCCESS_PATH_VAR, &config.success_path)?;
    validate_path(FAILURE_PATH_VAR, &config.failure_path)?;
    Ok(config)
  }
}

fn validate_path(var: &'static str, path: &str) -> Result<(), ConfigError> {
  if path.starts_with('/') && !path.contains(char::is_whitespace) {
    Ok(())
  } else {
    Err(ConfigError::BadRedirectPath(var, path.to_owned()))
  }
}

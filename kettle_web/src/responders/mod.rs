pub mod file;

use thiserror::Error;

use super::request::ParsedRequest;
use file::ResolveError;

/// Why a handler could not produce a response.
///
/// None of these are turned into a response by the handler itself; the
/// connection layer decides what to send (see `status_code`).
#[derive(Debug, Error)]
pub enum HandlerError {
  #[error("not found: {0}")]
  NotFound(String), // unknown account or missing static resource
  #[error("failed to read resource: {0}")]
  IOFailure(#[from] std::io::Error),
  #[error("malformed body: missing `{0}`")]
  MalformedBody(String), // an expected form field is absent
}

impl HandlerError {
  // the status the connection layer should answer with
  pub fn status_code(&self) -> u16 {
    match self {
      HandlerError::NotFound(_) => 404,
      HandlerError::IOFailure(_) => 500,
      HandlerError::MalformedBody(_) => 400,
    }
  }
}

impl From<ResolveError> for HandlerError {
  fn from(err: ResolveError) -> HandlerError {
    match err {
      ResolveError::NotFound(path) => HandlerError::NotFound(path),
      ResolveError::IOError(error) => HandlerError::IOFailure(error),
    }
  }
}

// takes a parsed request and produces the literal response bytes
pub trait RequestHandler: Send + Sync {
  fn handle(&self, request: &ParsedRequest) -> Result<Vec<u8>, HandlerError>;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn errors_map_to_status_codes() {
    assert_eq!(HandlerError::NotFound("gugu".to_owned()).status_code(), 404);
    assert_eq!(HandlerError::MalformedBody("password".to_owned()).status_code(), 400);
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    assert_eq!(HandlerError::from(io).status_code(), 500);
  }

  #[test]
  fn resolve_errors_convert() {
    let err = HandlerError::from(ResolveError::NotFound("/nope.html".to_owned()));
    assert!(matches!(err, HandlerError::NotFound(ref path) if path == "/nope.html"));
    assert_eq!(err.to_string(), "not found: /nope.html");
  }
}

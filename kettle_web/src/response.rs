use super::status::Status;
use crate::constants::{CONTENT_LENGTH, CONTENT_TYPE, CRLF, HTTP_VERSION, LOCATION, MIME_HTML};

/// A response ready to be serialized.
///
/// Headers are kept as an ordered list so that the same response always
/// serializes to the same bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
  pub status: Status,
  pub headers: Vec<(String, String)>,
  pub message_body: Option<Vec<u8>>,
}

impl Response {
  // create an empty response from a status code
  pub fn new(status: u16) -> Response {
    Response::from_status(Status::from_standard_code(status))
  }

  pub fn from_status(status: Status) -> Response {
    Response {
      status,
      headers: Vec::new(),
      message_body: None,
    }
  }

  pub fn with_header(mut self, name: &str, value: &str) -> Response {
    self.headers.push((name.to_owned(), value.to_owned()));
    self
  }

  // sets the body along with its Content-Type and Content-Length, in that order
  pub fn with_body(self, body: &[u8], content_type: &str) -> Response {
    let mut response = self
      .with_header(CONTENT_TYPE, content_type)
      .with_header(CONTENT_LENGTH, &body.len().to_string());
    response.message_body = Some(body.to_vec());
    response
  }

  // status line, headers, blank line, then the body (if any)
  pub fn to_bytes(&self) -> Vec<u8> {
    let body_len = self.message_body.as_ref().map_or(0, Vec::len);
    let mut head = format!("{} {}{}", HTTP_VERSION, self.status, CRLF);
    for (key, val) in self.headers.iter() {
      head.push_str(&format!("{}: {}{}", key, val, CRLF));
    }
    head.push_str(CRLF);

    let mut bytes = Vec::with_capacity(head.len() + body_len);
    bytes.extend_from_slice(head.as_bytes());
    if let Some(body) = &self.message_body {
      bytes.extend_from_slice(body);
    }
    bytes
  }
}

/// `200 OK` carrying `body`. Content-Length counts bytes, not characters.
pub fn build_ok(body: &[u8], content_type: &str) -> Vec<u8> {
  Response::new(200).with_body(body, content_type).to_bytes()
}

/// `302 FOUND` pointing at `location`, with no body.
pub fn build_redirect(location: &str) -> Vec<u8> {
  Response::from_status(Status::new(302, "FOUND"))
    .with_header(LOCATION, location)
    .to_bytes()
}

/// A minimal html page describing `code`, for the connection layer to send
/// when a handler fails.
pub fn build_error_page(code: u16) -> Vec<u8> {
  let status = Status::from_standard_code(code);
  let page = format!(
    "<!DOCTYPE html><html><head><title>{0}</title></head><body><h1>{0}</h1></body></html>",
    status
  );
  Response::from_status(status)
    .with_body(page.as_bytes(), MIME_HTML.1)
    .to_bytes()
}

/// Response building capability that handlers are composed with.
pub trait ResponseBuilder: Send + Sync {
  fn ok(&self, body: &[u8], content_type: &str) -> Vec<u8> {
    build_ok(body, content_type)
  }

  fn redirect(&self, location: &str) -> Vec<u8> {
    build_redirect(location)
  }

  fn error_page(&self, code: u16) -> Vec<u8> {
    build_error_page(code)
  }
}

/// Plain HTTP/1.1 text responses.
#[derive(Clone, Copy, Debug, Default)]
pub struct Http11;

impl ResponseBuilder for Http11 {}

use std::fs;
use std::sync::Arc;
use std::thread;

use kettle_auth::{Credential, InMemoryCredentialStore, LoginHandler};
use kettle_web::request::ParsedRequest;
use kettle_web::responders::file::FileResolver;
use kettle_web::responders::{HandlerError, RequestHandler};
use kettle_web::response::{build_ok, build_redirect};
use tempfile::TempDir;

const LOGIN_PAGE: &str = "<!DOCTYPE html>\n<form method=\"post\" action=\"/login.html\">로그인</form>\n";

fn login_handler() -> (TempDir, LoginHandler<FileResolver, InMemoryCredentialStore>) {
  let root = TempDir::new().unwrap();
  fs::write(root.path().join("login.html"), LOGIN_PAGE).unwrap();
  let resolver = FileResolver::new(root.path(), false).unwrap();
  (root, LoginHandler::new(resolver, InMemoryCredentialStore::with_defaults()))
}

fn login_post(body: &str) -> ParsedRequest {
  ParsedRequest::new("POST", "/login.html", "HTTP/1.1")
    .with_header("Host", "localhost:8080")
    .with_header("Connection", "keep-alive")
    .with_header("Content-Length", &body.len().to_string())
    .with_header("Content-Type", "application/x-www-form-urlencoded")
    .with_body(body)
}

#[test]
fn correct_password_redirects_to_index() {
  let (_root, handler) = login_handler();
  let response = handler.handle(&login_post("account=gugu&password=password")).unwrap();
  assert_eq!(
    String::from_utf8(response).unwrap(),
    "HTTP/1.1 302 FOUND\r\nLocation: /index.html\r\n\r\n"
  );
}

#[test]
fn wrong_password_redirects_to_401() {
  let (_root, handler) = login_handler();
  let response = handler.handle(&login_post("account=gugu&password=password1")).unwrap();
  assert_eq!(response, build_redirect("/401.html"));
}

#[test]
fn no_body_serves_login_page() {
  let (root, handler) = login_handler();
  let request = ParsedRequest::new("GET", "/login.html", "HTTP/1.1")
    .with_header("Host", "localhost:8080")
    .with_header("Connection", "keep-alive");
  let response = String::from_utf8(handler.handle(&request).unwrap()).unwrap();

  let file_size = fs::metadata(root.path().join("login.html")).unwrap().len();
  assert!(response.contains(&format!("Content-Length: {}\r\n", file_size)));
  assert_eq!(
    response.into_bytes(),
    build_ok(LOGIN_PAGE.as_bytes(), "text/html; charset=utf-8")
  );
}

#[test]
fn unknown_account_produces_no_response() {
  let (_root, handler) = login_handler();
  match handler.handle(&login_post("account=nobody&password=password")) {
    Err(HandlerError::NotFound(account)) => assert_eq!(account, "nobody"),
    other => panic!("expected NotFound, got {:?}", other),
  }
}

#[test]
fn hashed_credentials_log_in() {
  let root = TempDir::new().unwrap();
  let store = InMemoryCredentialStore::new();
  store.save(Credential::hashed("webe", &bcrypt::hash("hunter2", 4).unwrap()));
  let handler = LoginHandler::new(FileResolver::new(root.path(), false).unwrap(), store);

  assert_eq!(
    handler.handle(&login_post("account=webe&password=hunter2")).unwrap(),
    build_redirect("/index.html")
  );
  assert_eq!(
    handler.handle(&login_post("account=webe&password=hunter3")).unwrap(),
    build_redirect("/401.html")
  );
}

#[test]
fn handler_is_shared_across_threads() {
  let (_root, handler) = login_handler();
  let handler = Arc::new(handler);

  let workers = (0..8)
    .map(|i| {
      let handler = Arc::clone(&handler);
      thread::spawn(move || {
        let body = if i % 2 == 0 {
          "account=gugu&password=password"
        } else {
          "account=gugu&password=wrong"
        };
        (i, handler.handle(&login_post(body)).unwrap())
      })
    })
    .collect::<Vec<_>>();

  for worker in workers {
    let (i, response) = worker.join().unwrap();
    let expected = if i % 2 == 0 { "/index.html" } else { "/401.html" };
    assert_eq!(response, build_redirect(expected));
  }
}

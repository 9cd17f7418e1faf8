use std::collections::HashMap;

use url::form_urlencoded;

/// Decoded `application/x-www-form-urlencoded` parameters.
///
/// Keys are unique. When a key repeats, the last value wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
  inner: HashMap<String, String>,
}

impl QueryParams {
  pub fn parse(input: &[u8]) -> QueryParams {
    let inner = form_urlencoded::parse(input)
      .filter(|(key, _)| !key.is_empty())
      .map(|(key, value)| (key.into_owned(), value.into_owned()))
      .collect::<HashMap<String, String>>();
    QueryParams { inner }
  }

  pub fn value_by(&self, key: &str) -> Option<&str> {
    self.inner.get(key).map(String::as_str)
  }

  pub fn contains(&self, key: &str) -> bool {
    self.inner.contains_key(key)
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_login_body() {
    let params = QueryParams::parse(b"account=gugu&password=password");
    assert_eq!(params.value_by("account"), Some("gugu"));
    assert_eq!(params.value_by("password"), Some("password"));
    assert_eq!(params.len(), 2);
  }

  #[test]
  fn decodes_escapes() {
    let params = QueryParams::parse(b"account=gu+gu&password=p%40ss%3Dword");
    assert_eq!(params.value_by("account"), Some("gu gu"));
    assert_eq!(params.value_by("password"), Some("p@ss=word"));
  }

  #[test]
  fn last_duplicate_wins() {
    let params = QueryParams::parse(b"account=first&account=second");
    assert_eq!(params.value_by("account"), Some("second"));
    assert_eq!(params.len(), 1);
  }

  #[test]
  fn key_without_value_is_empty_string() {
    let params = QueryParams::parse(b"account&&=orphan");
    assert_eq!(params.value_by("account"), Some(""));
    assert!(!params.contains(""));
    assert_eq!(params.len(), 1);
  }
}

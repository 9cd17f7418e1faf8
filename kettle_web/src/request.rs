use std::collections::HashMap;

use crate::query::QueryParams;

/// Header fields keyed case-insensitively.
/// The name is kept as first seen so it can be reported back unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Headers {
    inner: HashMap<String, (String, String)>,
}

impl Headers {
    pub fn new() -> Headers {
        Headers {
            inner: HashMap::new(),
        }
    }

    // http 1.1 rfc7230 says multiple headers with identical names can be combined with commas
    pub fn insert(&mut self, name: &str, value: &str) {
        let key = name.to_ascii_lowercase();
        let value = value.trim();
        match self.inner.get_mut(&key) {
            Some((_, existing_value)) => {
                existing_value.push(',');
                existing_value.push_str(value);
            }
            None => {
                self.inner
                    .insert(key, (name.trim().to_owned(), value.to_owned()));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .get(&name.to_ascii_lowercase())
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Every field with its name as first seen.
    ///
    /// The order is unspecified and does not follow insertion. Sort the
    /// output when a stable order is needed.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner
            .values()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// A request as handed over by the parsing layer.
///
/// The value is never mutated once built. `with_header` and `with_body`
/// consume the request and are only meant for the parsing layer (and tests)
/// while assembling it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedRequest {
    method: String,
    path: String,
    query: Option<String>,
    http_version: String,
    headers: Headers,
    body: Option<Vec<u8>>,
}

impl ParsedRequest {
    // the request target is split into path and query string here.
    pub fn new(method: &str, target: &str, http_version: &str) -> ParsedRequest {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path.to_owned(), Some(query.to_owned())),
            None => (target.to_owned(), None),
        };
        ParsedRequest {
            method: method.trim().to_uppercase(),
            path,
            query,
            http_version: http_version.trim().to_owned(),
            headers: Headers::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> ParsedRequest {
        self.headers.insert(name, value);
        self
    }

    // an empty body counts as no body at all
    pub fn with_body<B: Into<Vec<u8>>>(mut self, body: B) -> ParsedRequest {
        let body = body.into();
        self.body = if body.is_empty() { None } else { Some(body) };
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn http_version(&self) -> &str {
        &self.http_version
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Decodes the body as `application/x-www-form-urlencoded` text.
    /// A request without a body yields empty params.
    pub fn body_params(&self) -> QueryParams {
        match &self.body {
            Some(body) => QueryParams::parse(body),
            None => QueryParams::default(),
        }
    }

    pub fn query_params(&self) -> QueryParams {
        match &self.query {
            Some(query) => QueryParams::parse(query.as_bytes()),
            None => QueryParams::default(),
        }
    }
}

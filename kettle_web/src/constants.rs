// ---WIRE---
pub const HTTP_VERSION: &str = "HTTP/1.1";
pub const CRLF: &str = "\r\n";

// ---HEADERS---
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const LOCATION: &str = "Location";

// ---MIME TYPES---
// TODO: Currently assuming every text resource is utf-8 encoded
pub const MIME_JS: (&str, &str) = ("js", "application/javascript; charset=utf-8");
pub const MIME_JSON: (&str, &str) = ("json", "application/json; charset=utf-8");
pub const MIME_HTM: (&str, &str) = ("htm", "text/html; charset=utf-8");
pub const MIME_HTML: (&str, &str) = ("html", "text/html; charset=utf-8");
pub const MIME_CSS: (&str, &str) = ("css", "text/css; charset=utf-8");
pub const MIME_TXT: (&str, &str) = ("txt", "text/plain; charset=utf-8");
pub const MIME_GIF: (&str, &str) = ("gif", "image/gif");
pub const MIME_JPG: (&str, &str) = ("jpg", "image/jpeg");
pub const MIME_JPEG: (&str, &str) = ("jpeg", "image/jpeg");
pub const MIME_PNG: (&str, &str) = ("png", "image/png");
pub const MIME_SVG: (&str, &str) = ("svg", "image/svg+xml");
pub const MIME_ICO: (&str, &str) = ("ico", "image/x-icon");

pub const MIME_OCTET_STREAM: &str = "application/octet-stream";

pub const DEFAULT_MIME_TYPES: [(&str, &str); 12] = [
  MIME_JS, MIME_JSON, MIME_HTM, MIME_HTML, MIME_CSS, MIME_TXT, MIME_GIF, MIME_JPG, MIME_JPEG,
  MIME_PNG, MIME_SVG, MIME_ICO,
];

/// Looks up the content type for a path by its file extension.
/// Unknown or missing extensions fall back to `application/octet-stream`.
pub fn content_type_for(path: &str) -> &'static str {
  let file_name = path.rsplit('/').next().unwrap_or(path);
  let extension = match file_name.rsplit_once('.') {
    Some((_, ext)) => ext.to_ascii_lowercase(),
    None => return MIME_OCTET_STREAM,
  };
  DEFAULT_MIME_TYPES
    .iter()
    .find(|(ext, _)| *ext == extension)
    .map(|(_, mime)| *mime)
    .unwrap_or(MIME_OCTET_STREAM)
}

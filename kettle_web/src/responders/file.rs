use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::constants::content_type_for;

pub const STATIC_ROOT_VAR: &str = "STATIC_ROOT";
pub const STATIC_USE_INDEX_VAR: &str = "STATIC_USE_INDEX";
pub const DEFAULT_STATIC_ROOT: &str = "static";

/// The bytes of a static resource and the content type to serve it with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
  pub bytes: Vec<u8>,
  pub content_type: String,
}

#[derive(Debug, Error)]
pub enum ResolveError {
  #[error("no resource at {0}")]
  NotFound(String),
  #[error("failed to read resource: {0}")]
  IOError(#[from] io::Error),
}

pub trait StaticResolver: Send + Sync {
  fn resolve(&self, path: &str) -> Result<Resource, ResolveError>;
}

/// Serves files below a mount point on disk.
#[derive(Clone, Debug)]
pub struct FileResolver {
  mount_point: PathBuf,
  use_index: bool, // serve index.html / index.htm for directories
}

impl FileResolver {
  pub fn new<P: AsRef<Path>>(mount_point: P, use_index: bool) -> Result<FileResolver, ResolveError> {
    let mount_point = mount_point.as_ref();
    match mount_point.canonicalize() {
      Ok(abs_path) => Ok(FileResolver {
        mount_point: abs_path,
        use_index,
      }),
      Err(_error) => Err(ResolveError::NotFound(mount_point.display().to_string())),
    }
  }

  // STATIC_ROOT picks the mount point, STATIC_USE_INDEX=true|1 turns on index files
  pub fn from_env() -> Result<FileResolver, ResolveError> {
    let mount_point = env::var(STATIC_ROOT_VAR).unwrap_or_else(|_| DEFAULT_STATIC_ROOT.to_owned());
    FileResolver::new(mount_point, use_index_from(env::var(STATIC_USE_INDEX_VAR).ok()))
  }

  // finds the file on disk for a request path.
  // the file must exist and live inside the mount point
  fn locate(&self, path: &str) -> Result<PathBuf, ResolveError> {
    let mut file_path = self.mount_point.clone();
    file_path.push(path.trim_start_matches('/'));

    let mut abs_file_path = match file_path.canonicalize() {
      Ok(abs_file_path) => abs_file_path,
      Err(_error) => return Err(ResolveError::NotFound(path.to_owned())),
    };
    if !abs_file_path.starts_with(&self.mount_point) {
      warn!("rejected path outside of mount point: {}", path);
      return Err(ResolveError::NotFound(path.to_owned()));
    }

    if self.use_index && abs_file_path.is_dir() {
      if abs_file_path.join("index.html").is_file() {
        abs_file_path.push("index.html");
      } else if abs_file_path.join("index.htm").is_file() {
        abs_file_path.push("index.htm");
      }
    }
    // at the moment we only return files. no directory listings
    if abs_file_path.is_file() {
      Ok(abs_file_path)
    } else {
      Err(ResolveError::NotFound(path.to_owned()))
    }
  }
}

impl StaticResolver for FileResolver {
  fn resolve(&self, path: &str) -> Result<Resource, ResolveError> {
    let file_path = self.locate(path)?;
    let bytes = fs::read(&file_path)?;
    let content_type = content_type_for(&file_path.to_string_lossy()).to_owned();
    debug!("resolved {} to {} ({} bytes)", path, file_path.display(), bytes.len());
    Ok(Resource {
      bytes,
      content_type,
    })
  }
}

// only "1" or "true" (any case) turn index files on
pub fn use_index_from(val: Option<String>) -> bool {
  match val {
    Some(val) => {
      let val = val.trim();
      val == "1" || val.eq_ignore_ascii_case("true")
    }
    None => false,
  }
}

use std::path::{Path, PathBuf};

use tracing::debug;

use super::Manifest;
use crate::Result;

/// Default file name looked up in the working directory.
pub const DEFAULT_FILENAME: &str = "nomen.toml";

/// Represents a nomen.toml file with both raw content and parsed manifest.
pub struct NomenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl NomenToml {
    /// Open and parse a nomen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;
        debug!(path = %path.display(), "loaded manifest");

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Open `path` if given, else `./nomen.toml` if it exists.
    ///
    /// Returns `None` when no path was given and no default file exists.
    pub fn discover(path: Option<&Path>) -> Result<Option<Self>> {
        match path {
            Some(path) => Self::open(path).map(Some),
            None if Path::new(DEFAULT_FILENAME).exists() => Self::open(DEFAULT_FILENAME).map(Some),
            None => {
                debug!("no {} found, using defaults", DEFAULT_FILENAME);
                Ok(None)
            }
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Consume the file, keeping the parsed manifest.
    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }
}

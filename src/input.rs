//! Normalization and verification of command-line paths

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Files whose presence marks the root of a project
pub const PROJECT_MANIFESTS: &[&str] = &[
    "pom.xml",
    "build.gradle",
    "build.gradle.kts",
    "package.json",
    "Cargo.toml",
];

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{what} does not exist: {}", .path.display())]
    NotFound { what: &'static str, path: PathBuf },

    #[error("Input file is a directory: {}", .path.display())]
    IsDirectory { path: PathBuf },

    #[error("Output root is not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

/// Strips one pair of matching quotes and makes the path absolute
pub fn normalize(raw: &str) -> Result<PathBuf, InputError> {
    let path = PathBuf::from(unquote(raw.trim()));
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = env::current_dir().map_err(InputError::CurrentDir)?;
    Ok(cwd.join(path))
}

fn unquote(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.len() > 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

/// Splits comma-separated arguments into trimmed, non-empty parts
pub fn split_list<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.as_ref().split(','))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// An existing, non-directory input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    path: PathBuf,
}

impl InputFile {
    pub fn open(raw: &str) -> Result<Self, InputError> {
        let path = normalize(raw)?;
        if !path.exists() {
            return Err(InputError::NotFound {
                what: "Input file",
                path,
            });
        }
        if path.is_dir() {
            return Err(InputError::IsDirectory { path });
        }
        debug!(path = %path.display(), "Input file accepted");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }

    /// Nearest ancestor holding a build manifest, else the parent directory
    pub fn project_root(&self) -> PathBuf {
        project_root(&self.path)
    }
}

impl fmt::Display for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// An existing directory generated artifacts are written below
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRoot {
    path: PathBuf,
}

impl OutputRoot {
    pub fn open(raw: &str) -> Result<Self, InputError> {
        let path = normalize(raw)?;
        if !path.exists() {
            return Err(InputError::NotFound {
                what: "Output root",
                path,
            });
        }
        if !path.is_dir() {
            return Err(InputError::NotADirectory { path });
        }
        Ok(Self { path })
    }

    /// Output root derived from the input's project
    pub fn for_input(input: &InputFile) -> Self {
        let path = input.project_root();
        info!(
            input = %input,
            root = %path.display(),
            "No output root given, generating into the input's project"
        );
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn project_root(file: &Path) -> PathBuf {
    let parent = file.parent().unwrap_or(file);
    parent
        .ancestors()
        .find(|dir| PROJECT_MANIFESTS.iter().any(|name| dir.join(name).is_file()))
        .unwrap_or(parent)
        .to_path_buf()
}

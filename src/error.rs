use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a build. Everything recoverable (missing course
/// directories, odd filenames, missing portraits) never reaches this type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("listing {}: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("parsing course map {}: {source}", path.display())]
    CourseMap {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("parsing site config {}: {source}", path.display())]
    SiteConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("writing output: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

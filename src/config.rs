use crate::constants::*;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Site settings, optionally read from `site.toml` in the site root. Every key
/// is optional and falls back to the built-in default.
///
/// ```toml
/// title = "Hunter CS Syllabi"
/// heading = "Hunter College Computer Science Syllabi"
/// syllabi_dir = "courses"
/// faculty_dir = "img/faculty"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub title: String,
    pub heading: String,
    pub stylesheet: String,
    pub script: String,
    pub favicon: String,
    /// Course map, relative to the site root
    pub map: String,
    /// Relative to the site root; also used verbatim in syllabus links
    pub syllabi_dir: String,
    /// Relative to the site root; also used verbatim in portrait sources
    pub faculty_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            heading: DEFAULT_HEADING.to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            script: DEFAULT_SCRIPT.to_string(),
            favicon: DEFAULT_FAVICON.to_string(),
            map: DEFAULT_MAP.to_string(),
            syllabi_dir: DEFAULT_SYLLABI_DIR.to_string(),
            faculty_dir: DEFAULT_FACULTY_DIR.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load an explicitly requested config file. A missing file is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::SiteConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `<root>/site.toml` if it exists, defaults otherwise.
    pub fn discover(root: &Path) -> Result<Self> {
        let path = root.join(SITE_CONFIG_FILE);
        if path.is_file() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Where things live on disk for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub root: PathBuf,
    pub map_path: PathBuf,
    pub syllabi_dir: String,
    pub faculty_dir: String,
}

impl Layout {
    pub fn new(root: &Path, config: &SiteConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            map_path: root.join(&config.map),
            syllabi_dir: config.syllabi_dir.clone(),
            faculty_dir: config.faculty_dir.clone(),
        }
    }

    /// On-disk directory for a course's syllabi
    pub fn course_dir(&self, course_code: &str) -> PathBuf {
        self.root
            .join(&self.syllabi_dir)
            .join(course_dir_name(course_code))
    }

    /// Site-relative link to a syllabus
    pub fn syllabus_href(&self, dir_name: &str, filename: &str) -> String {
        format!("{}/{}/{}", self.syllabi_dir, dir_name, filename)
    }

    /// Site-relative portrait path; join it onto `root` to check it exists
    pub fn portrait_src(&self, professor: &str) -> String {
        format!(
            "{}/{}{}",
            self.faculty_dir,
            professor.to_lowercase(),
            PORTRAIT_EXTENSION
        )
    }
}

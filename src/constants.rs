// ============================================================================
// Site Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "Hunter CS Syllabi";
pub const DEFAULT_HEADING: &str = "Hunter College Computer Science Syllabi";

pub const DEFAULT_STYLESHEET: &str = "css/styles.css";
pub const DEFAULT_SCRIPT: &str = "js/scripts.js";
pub const DEFAULT_FAVICON: &str = "favicon.ico";

/// Course map location, relative to the site root
pub const DEFAULT_MAP: &str = "map.json";

/// Directory holding one subdirectory of syllabi per course
pub const DEFAULT_SYLLABI_DIR: &str = "courses";

/// Directory holding `<professor>.jpg` portraits
pub const DEFAULT_FACULTY_DIR: &str = "img/faculty";

/// Optional site configuration looked up in the site root
pub const SITE_CONFIG_FILE: &str = "site.toml";

// ============================================================================
// Filename Convention
// ============================================================================

/// `<course>_<professor[+professor...]>_<anything>_<season><yy>.pdf`
pub const FIELD_SEPARATOR: char = '_';

/// Joins co-teaching professors inside the professor field
pub const CO_TEACHER_SEPARATOR: char = '+';

pub const SYLLABUS_EXTENSION: &str = ".pdf";
pub const PORTRAIT_EXTENSION: &str = ".jpg";

/// Minimum number of underscore fields for a name to follow the convention
pub const MIN_FIELDS: usize = 3;

/// Course directories use the course code with spaces replaced
pub fn course_dir_name(course_code: &str) -> String {
    course_code.replace(' ', "_")
}

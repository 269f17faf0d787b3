use crate::config::Layout;
use crate::constants::course_dir_name;
use crate::error::{Error, Result};
use crate::models::{CourseMap, ListedCategory, ListedCourse, Listing};
use crate::syllabus::chronological;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Load the category -> course code -> course name map
pub fn load_course_map(path: &Path) -> Result<CourseMap> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| Error::CourseMap {
        path: path.to_path_buf(),
        source,
    })
}

/// List the entry names directly inside `dir`, sorted by name.
///
/// Returns `None` when the directory does not exist. A path that exists but
/// is not a directory is an error. Names that aren't valid UTF-8 can't be
/// linked to and are skipped.
pub fn list_syllabi(dir: &Path) -> Result<Option<Vec<String>>> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(Error::NotADirectory {
                path: dir.to_path_buf(),
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(Error::Read {
                path: dir.to_path_buf(),
                source,
            })
        }
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| Error::List {
            path: dir.to_path_buf(),
            source,
        })?;
        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => tracing::debug!(
                "Skipping non UTF-8 file name {} in {}",
                entry.file_name().to_string_lossy(),
                dir.display()
            ),
        }
    }

    Ok(Some(names))
}

/// Resolve every course in the map against the syllabi directory. Courses
/// without a directory are left out; categories are always kept.
pub fn build_listing(map: &CourseMap, layout: &Layout) -> Result<Listing> {
    let mut categories = Vec::with_capacity(map.categories.len());

    for category in &map.categories {
        let mut courses = Vec::new();

        for course in &category.courses {
            let course_dir = layout.course_dir(&course.code);
            let Some(syllabi) = list_syllabi(&course_dir)? else {
                tracing::debug!(
                    "No syllabi directory for {} at {}, skipping",
                    course.code,
                    course_dir.display()
                );
                continue;
            };

            courses.push(ListedCourse {
                code: course.code.clone(),
                title: format!("{}: {}", course.code, course.name),
                dir_name: course_dir_name(&course.code),
                syllabi: chronological(syllabi),
            });
        }

        categories.push(ListedCategory {
            name: category.name.clone(),
            courses,
        });
    }

    Ok(Listing { categories })
}

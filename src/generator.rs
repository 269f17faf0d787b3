use crate::config::{Layout, SiteConfig};
use crate::formatter::pretty_category_name;
use crate::models::{ListedCategory, ListedCourse, Listing};
use crate::syllabus::Syllabus;

// ============================================================================
// Course Listing
// ============================================================================

/// Render the nested `<details>` widgets: categories open, courses closed.
///
/// Text from the course map and from filenames is inserted as is.
pub fn render_listing(listing: &Listing, layout: &Layout) -> String {
    listing
        .categories
        .iter()
        .map(|category| render_category(category, layout))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_category(category: &ListedCategory, layout: &Layout) -> String {
    let courses: Vec<String> = category
        .courses
        .iter()
        .map(|course| render_course(course, layout))
        .collect();

    format!(
        "<details open class=\"category\"><summary class=\"category-title\">{}</summary>{}</details>",
        pretty_category_name(&category.name),
        courses.join("\n")
    )
}

fn render_course(course: &ListedCourse, layout: &Layout) -> String {
    let bullets: Vec<String> = course
        .syllabi
        .iter()
        .map(|filename| {
            let syllabus = Syllabus::parse(filename);
            let link = format!(
                "<a href=\"{}\">{}</a>",
                layout.syllabus_href(&course.dir_name, filename),
                syllabus.display_name()
            );
            match faculty_icon(&syllabus, layout) {
                Some(icon) => format!("<li>{}{}</li>", icon, link),
                None => format!("<li>{}</li>", link),
            }
        })
        .collect();

    format!(
        "<details class=\"courses\"><summary class=\"course-title\">{}</summary><div><ul>{}</ul></div></details>",
        course.title,
        bullets.join("\n")
    )
}

/// Portrait of the syllabus's professor, if one exists on disk right now
pub fn faculty_icon(syllabus: &Syllabus, layout: &Layout) -> Option<String> {
    let professor = syllabus.professor?;
    let src = layout.portrait_src(professor);
    if !layout.root.join(&src).exists() {
        return None;
    }
    Some(format!("<img src=\"{}\" alt=\"{}\">", src, professor))
}

// ============================================================================
// Page
// ============================================================================

/// Values substituted into the page around the course listing
#[derive(Debug, Clone, Copy)]
pub struct PageAssets<'a> {
    pub title: &'a str,
    pub heading: &'a str,
    pub stylesheet: &'a str,
    pub script: &'a str,
    pub favicon: &'a str,
}

impl<'a> From<&'a SiteConfig> for PageAssets<'a> {
    fn from(config: &'a SiteConfig) -> Self {
        Self {
            title: &config.title,
            heading: &config.heading,
            stylesheet: &config.stylesheet,
            script: &config.script,
            favicon: &config.favicon,
        }
    }
}

/// Build the full HTML document around an already rendered listing
pub fn render_page(assets: PageAssets, courses: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">

<head>
	<title>{title}</title>
	<meta charset="utf-8"/>
	<meta name="viewport" content="width=device-width, initial-scale=1"/>
	<link rel="stylesheet" href="{stylesheet}">
	<link rel="icon" href="{favicon}">
</head>

<body>
	<div id="main">
		<h1>{heading}</h1>
		{courses}
	</div>
	<script src="{script}"></script>
</body>
</html>"#,
        title = assets.title,
        stylesheet = assets.stylesheet,
        favicon = assets.favicon,
        heading = assets.heading,
        courses = courses,
        script = assets.script,
    )
}

//! Metadata carried by syllabus filenames.
//!
//! A syllabus is named `<course>_<professor>_<anything>_<semester>.pdf`, for
//! example `CS127_ligorio_syllabus_s20.pdf` or, when co-taught,
//! `CS127_ligorio+stjohn_syllabus_f21.pdf`. The semester is a season letter
//! (`s` or `f`) followed by a two-digit year. Nothing here fails: names that
//! don't follow the convention simply yield no professor, no semester or no
//! sort key.

use crate::constants::{CO_TEACHER_SEPARATOR, FIELD_SEPARATOR, MIN_FIELDS, SYLLABUS_EXTENSION};
use std::cmp::Reverse;

/// Fields derived from a single syllabus filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllabus<'a> {
    pub filename: &'a str,
    /// Third-from-last field, `+`-joined when co-taught
    pub professor: Option<&'a str>,
    /// Last field without the extension, e.g. `s20`
    pub semester: Option<&'a str>,
}

impl<'a> Syllabus<'a> {
    pub fn parse(filename: &'a str) -> Self {
        let fields: Vec<&str> = filename.split(FIELD_SEPARATOR).collect();
        if fields.len() < MIN_FIELDS {
            return Syllabus {
                filename,
                professor: None,
                semester: None,
            };
        }

        let last = fields[fields.len() - 1];

        Syllabus {
            filename,
            professor: non_empty(fields[fields.len() - 3]),
            semester: strip_extension(last).and_then(non_empty),
        }
    }

    /// `"ligorio, stjohn (f21)"`, or the raw filename when the professor or
    /// semester is missing.
    pub fn display_name(&self) -> String {
        match (self.professor, self.semester) {
            (Some(professor), Some(semester)) => format!(
                "{} ({})",
                professor.replace(CO_TEACHER_SEPARATOR, ", "),
                semester
            ),
            _ => self.filename.to_string(),
        }
    }

    pub fn semester_key(&self) -> Option<SemesterKey> {
        self.semester.and_then(SemesterKey::parse)
    }
}

/// The field without its `.pdf` extension; `None` if it has none.
fn strip_extension(field: &str) -> Option<&str> {
    let split = field.len().checked_sub(SYLLABUS_EXTENSION.len())?;
    let stem = field.get(..split)?;
    let ext = field.get(split..)?;
    ext.eq_ignore_ascii_case(SYLLABUS_EXTENSION).then_some(stem)
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

// ============================================================================
// Chronology
// ============================================================================

/// Spring sorts before Fall within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Season {
    Spring,
    Fall,
}

/// Orders by year, then season. Field order matters for the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SemesterKey {
    pub year: i32,
    pub season: Season,
}

impl SemesterKey {
    /// `f21` -> Fall 21, `S20` -> Spring 20. Any season letter other than
    /// `f` counts as Spring.
    pub fn parse(semester: &str) -> Option<Self> {
        let mut chars = semester.chars();
        let season = match chars.next()? {
            'f' | 'F' => Season::Fall,
            _ => Season::Spring,
        };
        let year = chars.as_str().parse::<i32>().ok()?;
        Some(SemesterKey { year, season })
    }
}

/// Sorts syllabus filenames newest first. The sort is stable; filenames
/// without a readable semester go last, in their original order.
pub fn chronological(mut filenames: Vec<String>) -> Vec<String> {
    filenames.sort_by_key(|name| Reverse(Syllabus::parse(name).semester_key()));
    filenames
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_single_professor() {
        let s = Syllabus::parse("CS127_ligorio_syllabus_s20.pdf");
        assert_eq!(s.professor, Some("ligorio"));
        assert_eq!(s.semester, Some("s20"));
        assert_eq!(s.display_name(), "ligorio (s20)");
    }

    #[test]
    fn test_parse_co_taught() {
        let s = Syllabus::parse("CS127_ligorio+stjohn_syllabus_f21.pdf");
        assert_eq!(s.professor, Some("ligorio+stjohn"));
        assert_eq!(s.display_name(), "ligorio, stjohn (f21)");
    }

    #[test]
    fn test_short_name_falls_back_to_filename() {
        let s = Syllabus::parse("bad.pdf");
        assert_eq!(s.professor, None);
        assert_eq!(s.semester, None);
        assert_eq!(s.display_name(), "bad.pdf");

        let s = Syllabus::parse("CS101_s20.pdf");
        assert_eq!(s.display_name(), "CS101_s20.pdf");
    }

    #[test]
    fn test_three_fields_is_enough() {
        let s = Syllabus::parse("smith_syllabus_f19.pdf");
        assert_eq!(s.professor, Some("smith"));
        assert_eq!(s.display_name(), "smith (f19)");
    }

    #[test]
    fn test_empty_fields_fall_back() {
        assert_eq!(Syllabus::parse("CS1__x_s20.pdf").display_name(), "CS1__x_s20.pdf");
        assert_eq!(Syllabus::parse("CS1_a_x_.pdf").display_name(), "CS1_a_x_.pdf");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(Syllabus::parse("CS1_a_x_S20.PDF").semester, Some("S20"));
        assert_eq!(Syllabus::parse("CS1_a_x_s20.Pdf").display_name(), "a (s20)");
    }

    #[test]
    fn test_missing_extension_falls_back() {
        let s = Syllabus::parse("CS1_a_x_s20");
        assert_eq!(s.semester, None);
        assert_eq!(s.semester_key(), None);
        assert_eq!(s.display_name(), "CS1_a_x_s20");

        assert_eq!(Syllabus::parse("CS1_a_x_s20.doc").display_name(), "CS1_a_x_s20.doc");
        assert_eq!(Syllabus::parse("CS1_a_pdf").semester, None);
    }

    #[test]
    fn test_missing_extension_sorts_with_unreadable_names() {
        let sorted = chronological(names(&["CS1_a_x_s25", "CS1_a_x_s20.pdf"]));
        assert_eq!(sorted, names(&["CS1_a_x_s20.pdf", "CS1_a_x_s25"]));
    }

    #[test]
    fn test_semester_key_ordering() {
        let f20 = SemesterKey::parse("f20").unwrap();
        let s21 = SemesterKey::parse("s21").unwrap();
        let f21 = SemesterKey::parse("F21").unwrap();
        assert!(f20 < s21);
        assert!(s21 < f21);
        assert_eq!(SemesterKey::parse("x"), None);
        assert_eq!(SemesterKey::parse("fall"), None);
        assert_eq!(SemesterKey::parse(""), None);
    }

    #[test]
    fn test_chronological_newest_first() {
        let sorted = chronological(names(&[
            "CS127_ligorio_syllabus_s20.pdf",
            "CS127_stjohn_syllabus_f21.pdf",
            "CS127_raja_syllabus_f20.pdf",
            "CS127_stjohn_syllabus_s21.pdf",
        ]));
        assert_eq!(
            sorted,
            names(&[
                "CS127_stjohn_syllabus_f21.pdf",
                "CS127_stjohn_syllabus_s21.pdf",
                "CS127_raja_syllabus_f20.pdf",
                "CS127_ligorio_syllabus_s20.pdf",
            ])
        );
    }

    #[test]
    fn test_chronological_keeps_unreadable_names() {
        let sorted = chronological(names(&["bad.pdf", "CS101_x_s20.pdf"]));
        assert_eq!(sorted.len(), 2);
        assert!(sorted.contains(&"bad.pdf".to_string()));
        assert!(sorted.contains(&"CS101_x_s20.pdf".to_string()));
    }

    #[test]
    fn test_chronological_is_stable() {
        let input = names(&[
            "zeta.pdf",
            "CS1_a_x_s20.pdf",
            "CS1_b_x_s20.pdf",
            "CS1_c_x_sXX.pdf",
            "alpha.pdf",
        ]);
        let sorted = chronological(input);
        assert_eq!(
            sorted,
            names(&[
                "CS1_a_x_s20.pdf",
                "CS1_b_x_s20.pdf",
                "zeta.pdf",
                "CS1_c_x_sXX.pdf",
                "alpha.pdf",
            ])
        );
    }

    #[test]
    fn test_chronological_monotonic() {
        let sorted = chronological(names(&[
            "A_p_x_s19.pdf",
            "A_p_x_f22.pdf",
            "A_p_x_s22.pdf",
            "A_p_x_f19.pdf",
            "A_p_x_s20.pdf",
        ]));
        let keys: Vec<_> = sorted
            .iter()
            .map(|n| Syllabus::parse(n).semester_key().unwrap())
            .collect();
        assert!(keys.windows(2).all(|w| w[0] >= w[1]));
    }
}

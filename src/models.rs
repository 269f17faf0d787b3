use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

// ============================================================================
// Course Map (map.json)
// ============================================================================

/// `{"<category>": {"<course code>": "<course name>", ...}, ...}`
///
/// Categories and courses keep the order they have in the document, which is
/// the order they are rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseMap {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub courses: Vec<CourseEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseEntry {
    pub code: String,
    pub name: String,
}

/// Collects a JSON object into `(key, value)` pairs in document order.
struct OrderedPairs<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedPairs<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairsVisitor<V>(std::marker::PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for PairsVisitor<V> {
            type Value = OrderedPairs<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    // a repeated key keeps its first position and its last value
                    match pairs.iter_mut().find(|(k, _)| *k == key) {
                        Some(slot) => slot.1 = value,
                        None => pairs.push((key, value)),
                    }
                }
                Ok(OrderedPairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor(std::marker::PhantomData))
    }
}

impl<'de> Deserialize<'de> for CourseMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let OrderedPairs(categories) =
            OrderedPairs::<OrderedPairs<String>>::deserialize(deserializer)?;

        Ok(CourseMap {
            categories: categories
                .into_iter()
                .map(|(name, OrderedPairs(courses))| Category {
                    name,
                    courses: courses
                        .into_iter()
                        .map(|(code, name)| CourseEntry { code, name })
                        .collect(),
                })
                .collect(),
        })
    }
}

// ============================================================================
// Listing (what gets rendered)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub categories: Vec<ListedCategory>,
}

/// A category as rendered. Courses without a syllabus directory are absent,
/// the category itself is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedCategory {
    pub name: String,
    pub courses: Vec<ListedCourse>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedCourse {
    pub code: String,
    /// `"<code>: <name>"`
    pub title: String,
    /// Directory name under the syllabi root
    pub dir_name: String,
    /// Syllabus filenames, newest first
    pub syllabi: Vec<String>,
}

impl Listing {
    pub fn syllabus_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| c.courses.iter())
            .map(|c| c.syllabi.len())
            .sum()
    }
}

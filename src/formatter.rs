use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{L}+").unwrap());

/// Turn a category key into a heading: `cs-theory` -> `CS Theory`
pub fn pretty_category_name(category: &str) -> String {
    let spaced = category.replace('-', " ");
    title_case(&spaced).replace("Cs", "CS")
}

/// Upper-case the first letter of every run of letters and lower-case the rest.
/// Anything that isn't a letter (spaces, digits, apostrophes) starts a new run.
fn title_case(text: &str) -> String {
    WORD.replace_all(text, |caps: &regex::Captures| {
        let mut chars = caps[0].chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_category_name() {
        assert_eq!(pretty_category_name("data-structures"), "Data Structures");
        assert_eq!(pretty_category_name("cs-theory"), "CS Theory");
        assert_eq!(pretty_category_name("intro"), "Intro");
    }

    #[test]
    fn test_pretty_category_name_lowers_the_rest() {
        assert_eq!(pretty_category_name("SYSTEMS-and-NETWORKS"), "Systems And Networks");
    }

    #[test]
    fn test_cs_fixup_is_plain_substring() {
        assert_eq!(pretty_category_name("intro-to-cs"), "Intro To CS");
        assert_eq!(pretty_category_name("csci-electives"), "CSci Electives");
    }

    #[test]
    fn test_title_case_word_boundaries() {
        assert_eq!(title_case("2nd year"), "2Nd Year");
        assert_eq!(title_case("o'brien"), "O'Brien");
        assert_eq!(title_case(""), "");
    }
}

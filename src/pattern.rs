use regex::Regex;

use crate::result::{Result, StashlineError, StashlineErrorVariants};

/// A case-insensitive wildcard pattern anchored to the whole key.
///
/// `*` matches any sequence of characters, `?` matches exactly one character,
/// everything else is literal. There is no substring matching: the pattern has
/// to cover the key from start to end.
///
/// # Example
/// ```rust
/// use stashline::KeyPattern;
///
/// let pattern = KeyPattern::new("git*").unwrap();
/// assert!(pattern.matches("GitHub"));
/// assert!(!KeyPattern::new("hub").unwrap().matches("GitHub"));
/// ```
#[derive(Debug, Clone)]
pub struct KeyPattern {
    glob: String,
    regex: Regex,
}

impl KeyPattern {
    /// Compiles `glob` into an anchored, case-insensitive matcher.
    pub fn new(glob: &str) -> Result<Self> {
        let mut translated = String::with_capacity(glob.len() + 8);
        translated.push_str("(?is)^");
        for c in glob.chars() {
            match c {
                '*' => translated.push_str(".*"),
                '?' => translated.push('.'),
                c => translated.push_str(&regex::escape(&c.to_string())),
            }
        }
        translated.push('$');

        let regex = Regex::new(&translated).map_err(|source| {
            StashlineError(StashlineErrorVariants::InvalidPattern {
                glob: glob.to_string(),
                source,
            })
        })?;

        Ok(Self {
            glob: glob.to_string(),
            regex,
        })
    }

    /// Builds the pattern for a partially typed key: a blank partial key
    /// matches every key, anything else matches keys it is a prefix of.
    pub fn for_partial_key(partial_key: &str) -> Result<Self> {
        if partial_key.trim().is_empty() {
            Self::new("*")
        } else {
            Self::new(&format!("{partial_key}*"))
        }
    }

    /// The wildcard source this pattern was compiled from
    pub fn glob(&self) -> &str {
        &self.glob
    }

    /// Whether `key` is covered by the pattern in its entirety
    pub fn matches(&self, key: &str) -> bool {
        self.regex.is_match(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::prefix_wildcard("git*", "GitHub", true)]
    #[case::no_substring_match("hub", "GitHub", false)]
    #[case::no_suffix_wildcard_no_match("git", "GitHub", false)]
    #[case::case_insensitive_literal("github", "GitHub", true)]
    #[case::star_matches_everything("*", "anything-goes", true)]
    #[case::star_matches_empty("*", "", true)]
    #[case::inner_wildcard("g*b", "GitHub", true)]
    #[case::question_mark_single("g?", "gh", true)]
    #[case::question_mark_not_more("g?", "gist", false)]
    #[case::question_mark_not_less("g?", "g", false)]
    #[case::metacharacters_are_literal("a.b", "axb", false)]
    #[case::metacharacters_match_themselves("a.b", "a.b", true)]
    fn wildcard_matching(#[case] glob: &str, #[case] key: &str, #[case] expected: bool) {
        let pattern = KeyPattern::new(glob).unwrap();
        assert_eq!(pattern.matches(key), expected, "glob {glob:?} vs key {key:?}");
    }

    #[rstest]
    #[case::empty_matches_all("", "todo", true)]
    #[case::partial_is_a_prefix("gh", "gh-pages", true)]
    #[case::partial_matches_exact_key("gh", "gh", true)]
    #[case::partial_longer_than_key("gh", "g", false)]
    #[case::partial_ignoring_case("GIT", "github", true)]
    fn partial_key_normalization(#[case] partial: &str, #[case] key: &str, #[case] expected: bool) {
        let pattern = KeyPattern::for_partial_key(partial).unwrap();
        assert_eq!(pattern.matches(key), expected);
    }

    #[test]
    fn blank_partial_key_is_normalized_to_match_all() {
        let pattern = KeyPattern::for_partial_key("  ").unwrap();
        assert_eq!(pattern.glob(), "*");
    }
}

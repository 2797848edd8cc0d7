use regex::Regex;

use crate::result::{Result, StashlineError, StashlineErrorVariants};

/// Extracts a trailing `<prefix>:<partial key>` trigger token from an input line.
///
/// The trigger must be the token currently being typed: the colon and whatever
/// follows it have to run to the end of the line without any whitespace in
/// between. Earlier occurrences of the prefix on the same line are ignored.
///
/// # Example
/// ```rust
/// use stashline::TriggerMatcher;
///
/// let matcher = TriggerMatcher::new("bm").unwrap();
/// let found = matcher.find("echo hello && bm:gh").unwrap();
/// assert_eq!(found.preceding, "echo hello && ");
/// assert_eq!(found.partial_key, "gh");
///
/// // Not at the end of the line, so not a trigger
/// assert_eq!(matcher.find("bm:gh extra"), None);
/// ```
#[derive(Debug, Clone)]
pub struct TriggerMatcher {
    prefix: String,
    pattern: Regex,
}

/// Borrowed pieces of a line in which a trigger token was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerMatch<'l> {
    /// Everything typed before the `<prefix>:` token, the token itself excluded
    pub preceding: &'l str,
    /// The (possibly empty) run of non-whitespace typed after the colon
    pub partial_key: &'l str,
}

impl TriggerMatcher {
    /// Compiles the extraction pattern for `prefix`. The prefix is taken
    /// literally, so tokens containing regex metacharacters are fine.
    pub fn new(prefix: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"(.*?)({}:)(\S*)$", regex::escape(prefix))).map_err(
            |source| {
                StashlineError(StashlineErrorVariants::InvalidPrefix {
                    prefix: prefix.to_string(),
                    source,
                })
            },
        )?;

        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    /// The prefix this matcher was configured with
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Looks for a trailing trigger token in `line`.
    ///
    /// The lazy leading group makes the *last* `<prefix>:` token on the line
    /// win when several are present, since the partial key cannot contain
    /// whitespace and must extend to the end of the line.
    pub fn find<'l>(&self, line: &'l str) -> Option<TriggerMatch<'l>> {
        let caps = self.pattern.captures(line)?;

        Some(TriggerMatch {
            preceding: caps.get(1).map_or("", |m| m.as_str()),
            partial_key: caps.get(3).map_or("", |m| m.as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case::after_command("echo hello && bm:gh", Some(("echo hello && ", "gh")))]
    #[case::line_start("bm:gh", Some(("", "gh")))]
    #[case::empty_partial_key("bm:", Some(("", "")))]
    #[case::last_occurrence_wins("bm:a bm:b", Some(("bm:a ", "b")))]
    #[case::not_at_end_of_line("bm:gh extra", None)]
    #[case::no_trigger("echo hello", None)]
    #[case::colon_missing("bm", None)]
    #[case::whitespace_after_colon("bm: gh", None)]
    #[case::embedded_in_word("xbm:gh", Some(("x", "gh")))]
    fn trailing_trigger_extraction(
        #[case] line: &str,
        #[case] expected: Option<(&str, &str)>,
    ) {
        let matcher = TriggerMatcher::new("bm").unwrap();

        assert_eq!(
            matcher.find(line),
            expected.map(|(preceding, partial_key)| TriggerMatch {
                preceding,
                partial_key,
            })
        );
    }

    #[test]
    fn prefixes_are_taken_literally() {
        let matcher = TriggerMatcher::new("c++").unwrap();

        let found = matcher.find("open c++:vec").unwrap();
        assert_eq!(found.preceding, "open ");
        assert_eq!(found.partial_key, "vec");

        // The escaped prefix must not behave like a regex
        assert_eq!(matcher.find("open c:vec"), None);
    }

    #[test]
    fn different_prefixes_do_not_cross_match() {
        let bm = TriggerMatcher::new("bm").unwrap();
        let snip = TriggerMatcher::new("snip").unwrap();

        assert_eq!(bm.find("snip:sig"), None);
        assert!(snip.find("snip:sig").is_some());
    }

    #[test]
    fn only_the_final_buffer_line_can_hold_the_trigger() {
        let matcher = TriggerMatcher::new("bm").unwrap();

        let found = matcher.find("first line\nsecond bm:gh").unwrap();
        assert_eq!(found.preceding, "second ");
        assert_eq!(found.partial_key, "gh");

        assert_eq!(matcher.find("bm:gh\nsecond line"), None);
    }

    proptest! {
        // A found trigger reassembles the line exactly: preceding text, the
        // prefix-colon token, then a whitespace-free partial key.
        #[test]
        fn found_triggers_reassemble_the_line(line in "[ -~]{0,40}") {
            let matcher = TriggerMatcher::new("bm").unwrap();

            if let Some(found) = matcher.find(&line) {
                prop_assert!(found.partial_key.chars().all(|c| !c.is_whitespace()));
                prop_assert_eq!(
                    format!("{}bm:{}", found.preceding, found.partial_key),
                    line
                );
            } else {
                prop_assert!(!line.ends_with("bm:"));
            }
        }
    }
}

//! Step parsing.
//!
//! A record's content is a single sentence of process steps separated by
//! an arrow, e.g. `"Extract patterns → form concepts → enable inference."`.
//! [`split_steps`] turns that into `["Extract patterns", "form concepts",
//! "enable inference"]`.
//!
//! Empty segments (two delimiters in a row, or a leading/trailing
//! delimiter) come back as empty strings. They are never dropped here;
//! [`crate::Registry::new`] rejects content that produces them.

use std::iter::FusedIterator;

/// Token separating steps in record content
pub const STEP_DELIMITER: &str = "\u{2192}";

/// Lazy iterator over the steps of a content string.
///
/// Each clone is an independent cursor, so the same content can be walked
/// as many times as needed.
#[derive(Debug, Clone)]
pub struct Steps<'a> {
    rest: Option<&'a str>,
    delimiter: &'a str,
}

impl<'a> Iterator for Steps<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        let split = if self.delimiter.is_empty() {
            None
        } else {
            rest.split_once(self.delimiter)
        };
        let segment = match split {
            Some((segment, tail)) => {
                self.rest = Some(tail);
                segment
            }
            None => {
                self.rest = None;
                rest
            }
        };
        Some(clean_step(segment, self.delimiter))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.rest {
            None => (0, Some(0)),
            Some(_) if self.delimiter.is_empty() => (1, Some(1)),
            Some(rest) => (1, Some(rest.matches(self.delimiter).count() + 1)),
        }
    }
}

impl FusedIterator for Steps<'_> {}

/// Split content on [`STEP_DELIMITER`].
pub fn split_steps(content: &str) -> Steps<'_> {
    split_steps_on(content, STEP_DELIMITER)
}

/// Split content on an arbitrary delimiter. An empty delimiter never splits.
pub fn split_steps_on<'a>(content: &'a str, delimiter: &'a str) -> Steps<'a> {
    Steps {
        rest: Some(content),
        delimiter,
    }
}

/// Trim, drop one trailing period or stray delimiter, trim again.
fn clean_step<'a>(segment: &'a str, delimiter: &str) -> &'a str {
    let trimmed = segment.trim();
    let stripped = match trimmed.strip_suffix('.') {
        Some(s) => s,
        None if !delimiter.is_empty() => trimmed.strip_suffix(delimiter).unwrap_or(trimmed),
        None => trimmed,
    };
    stripped.trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(content: &str) -> Vec<&str> {
        split_steps(content).collect()
    }

    #[test]
    fn splits_three_steps_and_strips_final_period() {
        assert_eq!(
            steps("Extract patterns → form concepts → enable inference."),
            vec!["Extract patterns", "form concepts", "enable inference"]
        );
    }

    #[test]
    fn no_delimiter_yields_whole_content() {
        assert_eq!(steps("  Trace sources; test evidence.  "), vec!["Trace sources; test evidence"]);
    }

    #[test]
    fn empty_segments_are_preserved() {
        assert_eq!(steps("a → → b"), vec!["a", "", "b"]);
        assert_eq!(steps("→ a"), vec!["", "a"]);
        assert_eq!(steps("a →"), vec!["a", ""]);
    }

    #[test]
    fn only_one_trailing_period_is_stripped() {
        assert_eq!(steps("wait..."), vec!["wait.."]);
    }

    #[test]
    fn inner_periods_survive() {
        assert_eq!(
            steps("Build on experiences; learn from errors. → Define values."),
            vec!["Build on experiences; learn from errors", "Define values"]
        );
    }

    #[test]
    fn stray_delimiter_is_stripped() {
        assert_eq!(split_steps_on("a | b|", "|").collect::<Vec<_>>(), vec!["a", "b", ""]);
        assert_eq!(clean_step("b →", STEP_DELIMITER), "b");
    }

    #[test]
    fn empty_delimiter_never_splits() {
        assert_eq!(split_steps_on("a → b", "").collect::<Vec<_>>(), vec!["a → b"]);
    }

    #[test]
    fn steps_are_restartable() {
        let iter = split_steps("one → two");
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn size_hint_bounds_count() {
        let iter = split_steps("a → b → c");
        assert_eq!(iter.size_hint(), (1, Some(3)));
        let mut iter = split_steps("a");
        iter.next();
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
    }
}

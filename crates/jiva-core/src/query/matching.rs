use regex::Regex;

/// Build a case-insensitive pattern that matches `name` only as a whole word:
/// the match may not be preceded or followed by a letter, digit or underscore.
///
/// Explicit boundary classes are used instead of `\b` so names ending in
/// punctuation ("Y.S.R.") still match before a space.
pub fn word_regex(name: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?i)(?:^|\W){}(?:\W|$)",
        regex::escape(name.trim())
    ))
}

#[derive(Debug, Clone)]
struct Candidate {
    name: String,
    pattern: Regex,
}

/// Longest-match-wins lookup of known unit names inside free text.
///
/// Candidates are tried longest first so "North Goa" beats "Goa" when both
/// occur; ties keep their original order.
#[derive(Debug, Clone)]
pub struct UnitMatcher {
    candidates: Vec<Candidate>,
}

impl UnitMatcher {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut candidates: Vec<Candidate> = names
            .into_iter()
            .filter_map(|n| {
                let name = n.as_ref().trim();
                if name.is_empty() {
                    return None;
                }
                match word_regex(name) {
                    Ok(pattern) => Some(Candidate {
                        name: name.to_string(),
                        pattern,
                    }),
                    Err(e) => {
                        tracing::warn!("skipping unit name '{}': {}", name, e);
                        None
                    }
                }
            })
            .collect();

        candidates.sort_by_key(|c| std::cmp::Reverse(c.name.chars().count()));

        UnitMatcher { candidates }
    }

    /// The longest candidate that occurs in `text` as a whole word.
    pub fn find(&self, text: &str) -> Option<&str> {
        self.candidates
            .iter()
            .find(|c| c.pattern.is_match(text))
            .map(|c| c.name.as_str())
    }
}

/// Leftmost-match lookup of a fixed set of labels, such as year sheet names.
///
/// All labels are compiled into one alternation so the earliest label in the
/// text wins; at the same position the longer label wins.
#[derive(Debug, Clone)]
pub struct LabelMatcher {
    labels: Vec<String>,
    pattern: Option<Regex>,
}

impl LabelMatcher {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels: Vec<String> = labels
            .into_iter()
            .map(|l| l.as_ref().trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();

        if labels.is_empty() {
            return LabelMatcher {
                labels,
                pattern: None,
            };
        }

        let mut by_length: Vec<&str> = labels.iter().map(String::as_str).collect();
        by_length.sort_by_key(|l| std::cmp::Reverse(l.chars().count()));
        let alternation = by_length
            .iter()
            .map(|l| regex::escape(l))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = match Regex::new(&format!(r"(?i)(?:^|\W)({alternation})(?:\W|$)")) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!("cannot build label pattern for {:?}: {}", labels, e);
                None
            }
        };

        LabelMatcher { labels, pattern }
    }

    /// The leftmost label in `text`, spelled as it was given.
    pub fn find(&self, text: &str) -> Option<&str> {
        let caps = self.pattern.as_ref()?.captures(text)?;
        let matched = caps.get(1)?.as_str();
        self.labels
            .iter()
            .find(|l| l.eq_ignore_ascii_case(matched))
            .map(String::as_str)
    }
}

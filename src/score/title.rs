//! Title Parsing Module
//!
//! Heuristics for recognizing a club video and the final score announced in
//! its title. Pure functions only; no network or cache access.

use regex::Regex;

// == Score Pattern ==
/// Two integers separated by `-` or `:`, optionally padded with whitespace.
const SCORE_PATTERN: &str = r"([0-9]+)\s*[-:]\s*([0-9]+)";

/// Aliases used when none are configured.
pub const DEFAULT_ALIASES: &[&str] = &["файна", "fayna"];

// == Title Matcher ==
/// Recognizes club videos and extracts scores from their titles.
#[derive(Debug, Clone)]
pub struct TitleMatcher {
    score_re: Regex,
    /// Lowercased aliases
    aliases: Vec<String>,
}

impl TitleMatcher {
    /// Creates a matcher for the given aliases.
    ///
    /// Aliases are lowercased and blank ones dropped.
    pub fn new<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let aliases = aliases
            .into_iter()
            .map(|a| a.as_ref().trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();

        Self {
            score_re: Regex::new(SCORE_PATTERN).expect("score pattern is valid"),
            aliases,
        }
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    // == Score Extraction ==
    /// Returns the first `home-away` pair in the title whose numbers fit `u32`.
    ///
    /// Pairs that overflow are skipped; `None` when no pair parses.
    pub fn extract_score(&self, title: &str) -> Option<(u32, u32)> {
        self.score_re.captures_iter(title).find_map(|caps| {
            let home = caps.get(1)?.as_str().parse().ok()?;
            let away = caps.get(2)?.as_str().parse().ok()?;
            Some((home, away))
        })
    }

    // == Alias Matching ==
    /// Checks whether the title mentions the team, ignoring case.
    pub fn mentions_team(&self, title: &str) -> bool {
        let lowered = title.to_lowercase();
        self.aliases.iter().any(|alias| lowered.contains(alias.as_str()))
    }

    /// Returns the score when the title both mentions the team and carries one.
    pub fn match_finished(&self, title: &str) -> Option<(u32, u32)> {
        if !self.mentions_team(title) {
            return None;
        }
        self.extract_score(title)
    }
}

impl Default for TitleMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_ALIASES)
    }
}

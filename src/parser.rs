use crate::matcher::RuleTree;
use crate::types::{RuleLine, RuleSection};

/// Comment marker opening the privately submitted part of the list
const BEGIN_PRIVATE_MARKER: &str = "===BEGIN PRIVATE DOMAINS===";
/// Comment marker closing the privately submitted part of the list
const END_PRIVATE_MARKER: &str = "===END PRIVATE DOMAINS===";

/// Options controlling how a rule dataset is parsed.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Keep rules from the PRIVATE DOMAINS section
    pub include_private: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            include_private: true,
        }
    }
}

impl ParseOptions {
    /// Create new parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether private-section rules are kept.
    pub fn with_private_domains(mut self, include: bool) -> Self {
        self.include_private = include;
        self
    }
}

/// Parse a public suffix dataset into a [`RuleTree`].
///
/// Blank lines and `//` comments are skipped, as is any line that does not
/// form a usable rule. An empty or entirely malformed dataset yields an empty
/// tree, under which every host falls back to the implicit `*` rule.
pub fn parse_rules(text: &str) -> RuleTree {
    parse_rules_with(text, &ParseOptions::default())
}

/// Parse a public suffix dataset with explicit options.
pub fn parse_rules_with(text: &str, options: &ParseOptions) -> RuleTree {
    let mut tree = RuleTree::new();
    let mut section = RuleSection::Icann;
    let mut skipped = 0usize;
    let mut filtered = 0usize;

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers
        let line = line.trim();

        if let Some(comment) = line.strip_prefix("//") {
            if comment.contains(BEGIN_PRIVATE_MARKER) {
                section = RuleSection::Private;
            } else if comment.contains(END_PRIVATE_MARKER) {
                section = RuleSection::Icann;
            }
            continue;
        }

        if line.is_empty() {
            continue;
        }

        let Some(mut rule) = parse_rule_line(line) else {
            log::debug!("skipping malformed public suffix rule at line {}: {}", line_num, line);
            skipped += 1;
            continue;
        };
        rule.section = section;

        if section == RuleSection::Private && !options.include_private {
            filtered += 1;
            continue;
        }

        tree.insert(&rule);
    }

    log::debug!(
        "parsed {} public suffix rules ({} malformed, {} private filtered)",
        tree.rule_count(),
        skipped,
        filtered
    );

    tree
}

/// Parse a single rule line.
///
/// Only the text up to the first whitespace counts. Returns `None` for
/// comments, blank lines and malformed rules (empty labels, a bare `!`, a
/// single-label exception, or an exception that is itself a wildcard).
pub fn parse_rule_line(line: &str) -> Option<RuleLine> {
    let rule = line.split_whitespace().next()?;
    if rule.starts_with("//") {
        return None;
    }

    let (body, is_exception) = match rule.strip_prefix('!') {
        Some(stripped) => (stripped, true),
        None => (rule, false),
    };

    if body.is_empty() {
        return None;
    }

    let labels: Vec<String> = body.split('.').rev().map(str::to_lowercase).collect();
    if labels.iter().any(|label| label.is_empty()) {
        return None;
    }
    // An exception carves one concrete name out of a longer suffix
    if is_exception && (labels.len() < 2 || labels.iter().any(|label| label == "*")) {
        return None;
    }

    Some(RuleLine {
        labels,
        is_exception,
        section: RuleSection::Icann,
    })
}

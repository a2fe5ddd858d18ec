//! Public suffix rule tree.
//!
//! Rules are stored label by label, TLD first, in nested HashMaps, so a
//! lookup costs one map access per host label (plus one for `*` where a
//! wildcard rule exists). The tree is only mutated while parsing.
use std::collections::HashMap;

use super::{SuffixMatch, SuffixMatcher};
use crate::types::{RuleLine, RuleSection};

/// Label that matches any single host label
const WILDCARD: &str = "*";

/// A node in the rule tree
#[derive(Debug, Clone, Default)]
struct RuleNode {
    children: HashMap<String, RuleNode>,
    /// An explicit rule ends at this node
    terminal: bool,
    /// The rule ending here is an exception (`!` rule)
    is_exception: bool,
    /// This node's label is `*`
    is_wildcard: bool,
    section: RuleSection,
}

/// Immutable tree of public suffix rules, keyed by label from the TLD down.
#[derive(Debug, Clone, Default)]
pub struct RuleTree {
    root: RuleNode,
    rule_count: usize,
}

impl RuleTree {
    /// Create an empty tree (no rules loaded)
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parsed rule. Duplicate rules are merged.
    pub(crate) fn insert(&mut self, rule: &RuleLine) {
        let mut node = &mut self.root;
        for label in &rule.labels {
            node = node
                .children
                .entry(label.clone())
                .or_insert_with(|| RuleNode {
                    is_wildcard: label == WILDCARD,
                    ..RuleNode::default()
                });
        }

        if !node.terminal {
            node.terminal = true;
            node.section = rule.section;
            self.rule_count += 1;
        }
        if rule.is_exception {
            node.is_exception = true;
        }
    }

    /// Number of distinct rules in the tree
    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    /// Check if no rules are loaded
    pub fn is_empty(&self) -> bool {
        self.rule_count == 0
    }

    /// Section of the explicit rule that decides `labels`, if any.
    pub fn matched_section(&self, labels: &[&str]) -> Option<RuleSection> {
        let matched = self.longest_match(labels)?;
        let mut best = None;
        walk(&self.root, labels, 0, &mut |node, depth| {
            if depth == matched.suffix_label_count && node.is_exception == matched.is_exception {
                best.get_or_insert(node.section);
            }
        });
        best
    }
}

/// Visit every terminal node along the paths `labels` can take through the
/// tree, literal children before wildcards. The visitor sees each node with
/// its depth (number of labels consumed).
fn walk<F>(node: &RuleNode, labels: &[&str], depth: usize, visit: &mut F)
where
    F: FnMut(&RuleNode, usize),
{
    let Some(&label) = labels.get(depth) else {
        return;
    };

    let literal = node.children.get(label);
    // A host label of "*" already reached the wildcard child as a literal
    let wildcard = match literal {
        Some(child) if child.is_wildcard => None,
        _ => node.children.get(WILDCARD),
    };

    for child in literal.into_iter().chain(wildcard) {
        if child.terminal {
            visit(child, depth + 1);
        }
        walk(child, labels, depth + 1, visit);
    }
}

impl SuffixMatcher for RuleTree {
    fn longest_match(&self, labels: &[&str]) -> Option<SuffixMatch> {
        let mut exception: Option<SuffixMatch> = None;
        let mut longest: Option<SuffixMatch> = None;

        walk(&self.root, labels, 0, &mut |node, depth| {
            if exception.is_some() {
                return;
            }
            if node.is_exception {
                exception = Some(SuffixMatch {
                    suffix_label_count: depth,
                    is_exception: true,
                });
            } else if longest.map_or(true, |m| depth > m.suffix_label_count) {
                // Strictly longer only: literal rules are visited first and win ties
                longest = Some(SuffixMatch {
                    suffix_label_count: depth,
                    is_exception: false,
                });
            }
        });

        exception.or(longest)
    }
}

//! Suffix matching against the public suffix rule tree.
//!
//! Hosts are matched label by label, TLD first. The walk prefers literal
//! labels over `*`, lets exception rules override everything else, and falls
//! back to the implicit `*` rule (one label) when no explicit rule applies.
//!
//! ## Example
//!
//! ```
//! use tld_engine_r::matcher::SuffixMatcher;
//! use tld_engine_r::parse_rules;
//!
//! let tree = parse_rules("jp\nkobe.jp\n*.kobe.jp\n!city.kobe.jp");
//!
//! let m = tree.match_labels(&["jp", "kobe", "foo", "www"]);
//! assert_eq!(m.suffix_label_count, 3);      // *.kobe.jp
//!
//! let m = tree.match_labels(&["jp", "kobe", "city"]);
//! assert!(m.is_exception);                  // !city.kobe.jp
//! assert_eq!(m.effective_len(), 2);
//! ```

#[cfg(feature = "cache")]
mod cached;
mod tree;

#[cfg(feature = "cache")]
pub use cached::CachedMatcher;
pub use tree::RuleTree;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Outcome of matching a host's labels against the rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuffixMatch {
    /// Depth of the matched rule, in labels
    pub suffix_label_count: usize,
    /// The matched rule is an exception (`!` rule)
    pub is_exception: bool,
}

impl SuffixMatch {
    /// The implicit `*` rule: an unknown single-label TLD
    pub const DEFAULT: SuffixMatch = SuffixMatch {
        suffix_label_count: 1,
        is_exception: false,
    };

    /// Number of labels that form the public suffix.
    ///
    /// An exception gives its leftmost label back to the registrable domain.
    pub fn effective_len(&self) -> usize {
        if self.is_exception {
            self.suffix_label_count.saturating_sub(1)
        } else {
            self.suffix_label_count
        }
    }
}

/// Trait for public suffix matchers
///
/// `labels` are lowercased and in reverse domain order (TLD first).
pub trait SuffixMatcher: Send + Sync {
    /// Match against explicit rules only; `None` when no rule applies
    fn longest_match(&self, labels: &[&str]) -> Option<SuffixMatch>;

    /// Match with the implicit `*` rule as fallback
    fn match_labels(&self, labels: &[&str]) -> SuffixMatch {
        self.longest_match(labels).unwrap_or(SuffixMatch::DEFAULT)
    }
}

impl<M: SuffixMatcher + ?Sized> SuffixMatcher for Arc<M> {
    fn longest_match(&self, labels: &[&str]) -> Option<SuffixMatch> {
        (**self).longest_match(labels)
    }
}

impl<M: SuffixMatcher + ?Sized> SuffixMatcher for Box<M> {
    fn longest_match(&self, labels: &[&str]) -> Option<SuffixMatch> {
        (**self).longest_match(labels)
    }
}

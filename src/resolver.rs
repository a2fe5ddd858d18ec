//! Domain resolver.
//!
//! Composes normalization and suffix matching into the public queries:
//! validity, suffix existence, registrable domain and subdomain. Every query
//! is a pure function of the rule tree and its input.

use std::sync::Arc;

use crate::error::Result;
#[cfg(feature = "cache")]
use crate::matcher::CachedMatcher;
use crate::matcher::{RuleTree, SuffixMatcher};
use crate::normalize::normalize_host;
use crate::parser::parse_rules;
use crate::source::RuleSource;
use crate::types::{HostInput, HostParts, RuleSection};

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Resolver options.
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// LRU cache size for suffix match results
    pub cache_size: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

impl ResolverOptions {
    /// Create new resolver options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }
}

/// Resolves hosts against a shared, read-only rule tree.
///
/// Cloning is cheap: clones share the same tree.
#[derive(Debug, Clone)]
pub struct DomainResolver<M = Arc<RuleTree>> {
    matcher: M,
}

impl DomainResolver<Arc<RuleTree>> {
    /// Create a resolver over an already parsed tree.
    pub fn new(rules: impl Into<Arc<RuleTree>>) -> Self {
        Self {
            matcher: rules.into(),
        }
    }

    /// Parse `text` and create a resolver over it.
    pub fn from_rules(text: &str) -> Self {
        Self::new(parse_rules(text))
    }

    /// Load and parse the dataset supplied by `source`.
    pub fn from_source(source: &dyn RuleSource) -> Result<Self> {
        let text = source.load_rules()?;
        Ok(Self::from_rules(&text))
    }

    /// The shared rule tree
    pub fn rules(&self) -> &Arc<RuleTree> {
        &self.matcher
    }

    /// List section (ICANN or PRIVATE) of the rule that decides a valid `host`.
    ///
    /// `None` for invalid hosts and for hosts only the implicit `*` rule covers.
    pub fn suffix_section<'a>(&self, host: impl Into<HostInput<'a>>) -> Option<RuleSection> {
        let hostname = valid_host(host.into())?;
        let reversed: Vec<&str> = hostname.rsplit('.').collect();
        self.matcher.matched_section(&reversed)
    }
}

#[cfg(feature = "cache")]
impl DomainResolver<CachedMatcher<Arc<RuleTree>>> {
    /// Create a resolver that memoizes suffix matches in an LRU cache.
    pub fn with_options(rules: impl Into<Arc<RuleTree>>, options: ResolverOptions) -> Self {
        Self {
            matcher: CachedMatcher::new(rules.into(), options.cache_size),
        }
    }
}

impl<M: SuffixMatcher> DomainResolver<M> {
    /// Create a resolver over any suffix matcher.
    pub fn with_matcher(matcher: M) -> Self {
        Self { matcher }
    }

    /// The underlying matcher
    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Check if `host` is a usable hostname.
    ///
    /// False for non-string input, empty or dotless hosts, IPv4 literals and
    /// hosts with empty labels.
    pub fn is_valid<'a>(&self, host: impl Into<HostInput<'a>>) -> bool {
        valid_host(host.into()).is_some()
    }

    /// Check if any explicit rule covers the end of `host`.
    ///
    /// `uk.com` is true as long as `com` is a rule. Bare TLDs (`com`) are
    /// accepted here even though they are not valid hosts.
    pub fn tld_exists<'a>(&self, host: impl Into<HostInput<'a>>) -> bool {
        let input = host.into();
        if !input.is_text() {
            return false;
        }

        let hostname = normalize_host(input);
        if hostname.is_empty() {
            return false;
        }

        let reversed: Vec<&str> = hostname.rsplit('.').collect();
        if reversed.iter().any(|label| label.is_empty()) {
            return false;
        }

        self.matcher.longest_match(&reversed).is_some()
    }

    /// Registrable domain of `host`: the public suffix plus one label.
    ///
    /// `None` for invalid hosts and for hosts that are themselves a suffix.
    pub fn get_domain<'a>(&self, host: impl Into<HostInput<'a>>) -> Option<String> {
        let hostname = valid_host(host.into())?;
        let labels: Vec<&str> = hostname.split('.').collect();
        let start = self.domain_start(&labels)?;
        Some(labels[start..].join("."))
    }

    /// Labels left of the registrable domain, or an empty string.
    pub fn get_subdomain<'a>(&self, host: impl Into<HostInput<'a>>) -> String {
        let Some(hostname) = valid_host(host.into()) else {
            return String::new();
        };
        let labels: Vec<&str> = hostname.split('.').collect();
        match self.domain_start(&labels) {
            Some(start) => labels[..start].join("."),
            None => String::new(),
        }
    }

    /// Public suffix (effective TLD) of a valid `host`.
    pub fn public_suffix<'a>(&self, host: impl Into<HostInput<'a>>) -> Option<String> {
        let hostname = valid_host(host.into())?;
        let labels: Vec<&str> = hostname.split('.').collect();
        let suffix_len = self.suffix_len(&labels);
        if suffix_len == 0 || suffix_len > labels.len() {
            return None;
        }
        Some(labels[labels.len() - suffix_len..].join("."))
    }

    /// Resolve every part of `host` at once.
    ///
    /// `None` when `host` is invalid or has no registrable domain.
    pub fn parse_host<'a>(&self, host: impl Into<HostInput<'a>>) -> Option<HostParts> {
        let hostname = valid_host(host.into())?;
        let labels: Vec<&str> = hostname.split('.').collect();
        let start = self.domain_start(&labels)?;

        let subdomain = labels[..start].join(".");
        let domain = labels[start..].join(".");
        let public_suffix = labels[start + 1..].join(".");

        Some(HostParts {
            hostname,
            subdomain,
            domain,
            public_suffix,
        })
    }

    /// Effective suffix length, in labels, of a domain-ordered label list
    fn suffix_len(&self, labels: &[&str]) -> usize {
        let reversed: Vec<&str> = labels.iter().rev().copied().collect();
        self.matcher.match_labels(&reversed).effective_len()
    }

    /// Index of the first label of the registrable domain
    fn domain_start(&self, labels: &[&str]) -> Option<usize> {
        let suffix_len = self.suffix_len(labels);
        labels.len().checked_sub(suffix_len + 1)
    }
}

/// Normalize and validate; `None` for anything `is_valid` rejects.
fn valid_host(input: HostInput<'_>) -> Option<String> {
    if !input.is_text() {
        return None;
    }
    let hostname = normalize_host(input);
    is_valid_hostname(&hostname).then_some(hostname)
}

fn is_valid_hostname(host: &str) -> bool {
    host.contains('.') && !host.split('.').any(str::is_empty) && !is_ipv4_literal(host)
}

/// Exactly four dot-separated groups of one to three digits.
fn is_ipv4_literal(host: &str) -> bool {
    let mut groups = 0;
    for label in host.split('.') {
        groups += 1;
        if groups > 4 || label.is_empty() || label.len() > 3 {
            return false;
        }
        if !label.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    groups == 4
}

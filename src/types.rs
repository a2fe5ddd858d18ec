use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Raw host value accepted at the API boundary.
///
/// Text is classified normally. Anything else is `Unsupported`: it still has a
/// string form for [`normalize_host`](crate::normalize::normalize_host), but
/// every resolver query treats it as invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostInput<'a> {
    /// A string value
    Text(Cow<'a, str>),
    /// A non-string value, carried as its string form
    Unsupported(String),
}

impl<'a> HostInput<'a> {
    /// String form of the input, coerced if needed.
    pub fn as_str(&self) -> &str {
        match self {
            HostInput::Text(text) => text,
            HostInput::Unsupported(repr) => repr,
        }
    }

    /// Check if this input is a string value
    pub fn is_text(&self) -> bool {
        matches!(self, HostInput::Text(_))
    }
}

impl<'a> From<&'a str> for HostInput<'a> {
    fn from(value: &'a str) -> Self {
        HostInput::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for HostInput<'a> {
    fn from(value: &'a String) -> Self {
        HostInput::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for HostInput<'_> {
    fn from(value: String) -> Self {
        HostInput::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for HostInput<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        HostInput::Text(value)
    }
}

impl<'a, T> From<Option<T>> for HostInput<'a>
where
    T: Into<HostInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => match inner.into() {
                // An optional string is still a string
                HostInput::Text(text) => HostInput::Text(text),
                unsupported => unsupported,
            },
            None => HostInput::Unsupported(String::new()),
        }
    }
}

macro_rules! unsupported_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for HostInput<'_> {
                fn from(value: $ty) -> Self {
                    HostInput::Unsupported(value.to_string())
                }
            }
        )*
    };
}

unsupported_from_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

/// Division of the public suffix list a rule was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSection {
    /// Suffixes delegated by registries (`===BEGIN ICANN DOMAINS===`)
    #[default]
    Icann,
    /// Suffixes submitted by private operators (`===BEGIN PRIVATE DOMAINS===`)
    Private,
}

/// One parsed rule line before insertion into the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLine {
    /// Lowercased labels, TLD first
    pub labels: Vec<String>,
    /// Rule was prefixed with `!`
    pub is_exception: bool,
    /// Section the rule was declared in
    pub section: RuleSection,
}

impl RuleLine {
    /// Check if the rule's leftmost label is the `*` wildcard
    pub fn is_wildcard(&self) -> bool {
        self.labels.last().is_some_and(|label| label == "*")
    }
}

/// Every part of a resolved hostname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostParts {
    /// Normalized hostname
    pub hostname: String,
    /// Labels left of the registrable domain, possibly empty
    pub subdomain: String,
    /// Registrable domain (public suffix plus one label)
    pub domain: String,
    /// Effective TLD
    pub public_suffix: String,
}

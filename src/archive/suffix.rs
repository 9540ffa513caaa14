//! Member-name rules deciding which archive members get extracted

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DEFAULT_RULES: Vec<ExtractionSuffixRule> = vec![
        ExtractionSuffixRule::new("fits", r"\d\.fits$"),
        ExtractionSuffixRule::new("wt.fits", r"\d\.wt\.fits$"),
        ExtractionSuffixRule::new("mask.fits", r"\d\.mask\.fits$"),
    ];
}

/// A category of wanted member and the pattern its name must match
#[derive(Debug, Clone)]
pub struct ExtractionSuffixRule {
    category: &'static str,
    pattern: Regex,
}

impl ExtractionSuffixRule {
    fn new(category: &'static str, pattern: &str) -> Self {
        ExtractionSuffixRule {
            category,
            pattern: Regex::new(pattern).unwrap(),
        }
    }

    /// Category name (`fits`, `wt.fits` or `mask.fits`)
    pub fn category(&self) -> &'static str {
        self.category
    }

    /// Whether a member name belongs to this category
    pub fn matches(&self, member_name: &str) -> bool {
        self.pattern.is_match(member_name)
    }
}

/// The image, weight-map and mask rules
pub fn default_rules() -> &'static [ExtractionSuffixRule] {
    &DEFAULT_RULES
}

/// Category of the first rule a member name matches, if any
pub fn matching_category(member_name: &str) -> Option<&'static str> {
    default_rules()
        .iter()
        .find(|rule| rule.matches(member_name))
        .map(|rule| rule.category())
}

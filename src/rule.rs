//! Rules and rule sets.
//!
//! A [`Rule`] is a labelled predicate over the password text. A [`RuleSet`]
//! is the ordered list the meter checks; order only matters for display.

use std::fmt;
use std::sync::Arc;

use crate::predicates;

/// Boxed predicate shared between clones of a rule.
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A single strength criterion shown in the checklist.
#[derive(Clone)]
pub struct Rule {
    label: String,
    predicate: Predicate,
}

impl Rule {
    /// Creates a rule from a checklist label and a predicate.
    pub fn new<L, F>(label: L, predicate: F) -> Self
    where
        L: Into<String>,
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs the predicate against `password`.
    pub fn is_satisfied(&self, password: &str) -> bool {
        (self.predicate)(password)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Ordered sequence of rules. All rules weigh the same.
///
/// An empty set is allowed; it evaluates to a fraction of `0.0`.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// A set with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule, keeping insertion order.
    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The three built-in rules:
/// 1. "6+ characters"
/// 2. "with at least one digit"
/// 3. "with at least one special character"
impl Default for RuleSet {
    fn default() -> Self {
        Self::new(vec![
            Rule::new("6+ characters", predicates::min_length(6)),
            Rule::new("with at least one digit", predicates::has_digit()),
            Rule::new(
                "with at least one special character",
                predicates::has_special(),
            ),
        ])
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

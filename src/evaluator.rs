//! Password evaluator - runs every rule once and derives the fraction.

use crate::rule::RuleSet;
use crate::strength::StrengthTier;

/// Outcome of a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCheck {
    pub label: String,
    pub satisfied: bool,
}

/// Result of checking one password against a rule set.
///
/// Every view (progress bar, field state, checklist) reads from the same
/// `Evaluation`, so they cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Per-rule outcomes, in rule order.
    pub checks: Vec<RuleCheck>,
    pub satisfied: usize,
}

impl Evaluation {
    pub fn total(&self) -> usize {
        self.checks.len()
    }

    /// Satisfied rules over total rules, in `[0.0, 1.0]`.
    ///
    /// An empty rule set yields `0.0`.
    pub fn fraction(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.satisfied as f64 / total as f64
    }

    /// `fraction() * 100`, unrounded. This is the progress bar fill.
    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }

    pub fn tier(&self) -> StrengthTier {
        StrengthTier::from_fraction(self.fraction())
    }
}

/// Evaluates `password` against `rules`.
///
/// Each predicate runs exactly once; the count is taken from the same
/// results that the checklist shows.
pub fn evaluate(password: &str, rules: &RuleSet) -> Evaluation {
    let checks: Vec<RuleCheck> = rules
        .iter()
        .map(|rule| RuleCheck {
            label: rule.label().to_string(),
            satisfied: rule.is_satisfied(password),
        })
        .collect();
    let satisfied = checks.iter().filter(|c| c.satisfied).count();

    Evaluation { checks, satisfied }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    fn eval(password: &str) -> Evaluation {
        evaluate(password, &RuleSet::default())
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = eval("");
        assert_eq!(evaluation.satisfied, 0);
        assert_eq!(evaluation.fraction(), 0.0);
        assert_eq!(evaluation.tier(), StrengthTier::Weak);
    }

    #[test]
    fn test_evaluate_length_only() {
        let evaluation = eval("abcdef");
        assert_eq!(evaluation.satisfied, 1);
        assert_eq!(evaluation.fraction(), 1.0 / 3.0);
        assert_eq!(evaluation.tier(), StrengthTier::Weak);
        assert_eq!(evaluation.tier().label(), "Bad Password");
    }

    #[test]
    fn test_evaluate_two_of_three_is_strong() {
        let evaluation = eval("abcdef1");
        assert_eq!(evaluation.satisfied, 2);
        assert_eq!(evaluation.fraction(), 2.0 / 3.0);
        assert_eq!(evaluation.tier(), StrengthTier::Strong);
        assert_eq!(evaluation.tier().label(), "Great Password");
    }

    #[test]
    fn test_evaluate_all_rules() {
        let evaluation = eval("abc12!");
        assert_eq!(evaluation.fraction(), 1.0);
        assert_eq!(evaluation.tier(), StrengthTier::Strong);
        assert!(evaluation.checks.iter().all(|c| c.satisfied));
    }

    #[test]
    fn test_evaluate_short_with_digit() {
        let evaluation = eval("ab1");
        let flags: Vec<bool> = evaluation.checks.iter().map(|c| c.satisfied).collect();
        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(evaluation.tier(), StrengthTier::Weak);
        assert_eq!(evaluation.tier().label(), "Bad Password");
    }

    #[test]
    fn test_evaluate_empty_rule_set() {
        let evaluation = evaluate("anything", &RuleSet::empty());
        assert_eq!(evaluation.total(), 0);
        assert_eq!(evaluation.fraction(), 0.0);
        assert!(!evaluation.fraction().is_nan());
        assert_eq!(evaluation.tier(), StrengthTier::Weak);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let rules = RuleSet::default();
        for pwd in ["", "a", "abcdef1", "abc12!", "pässwörd 1"] {
            assert_eq!(evaluate(pwd, &rules), evaluate(pwd, &rules));
        }
    }

    #[test]
    fn test_evaluate_fraction_bounds() {
        let rules = RuleSet::default();
        for pwd in ["", "a", "!!!!!!", "123456", "abc12!", "     ", "\u{1F600}"] {
            let fraction = evaluate(pwd, &rules).fraction();
            assert!(
                (0.0..=1.0).contains(&fraction),
                "Fraction {} out of bounds for password '{}'",
                fraction,
                pwd
            );
        }
    }

    #[test]
    fn test_evaluate_runs_each_predicate_once() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let rules = RuleSet::empty().with(Rule::new("counted", move |_: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        }));

        let evaluation = evaluate("x", &rules);
        assert_eq!(evaluation.satisfied, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_evaluate_order_does_not_change_count() {
        let forward = RuleSet::default();
        let reversed: RuleSet = {
            let mut rules: Vec<Rule> = forward.iter().cloned().collect();
            rules.reverse();
            rules.into()
        };
        for pwd in ["abcdef", "ab1", "abc12!"] {
            assert_eq!(
                evaluate(pwd, &forward).satisfied,
                evaluate(pwd, &reversed).satisfied
            );
        }
    }
}

//! Password meter - owns the typed password and renders feedback.

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::{Evaluation, evaluate};
use crate::feedback::Feedback;
use crate::rule::RuleSet;

/// Meter configuration.
///
/// `MeterConfig::default()` checks the three built-in rules
/// (see [`RuleSet::default`]).
#[derive(Debug, Clone, Default)]
pub struct MeterConfig {
    pub rules: RuleSet,
}

impl MeterConfig {
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }
}

/// Holds the current password and derives feedback from it on demand.
///
/// The password is the only mutable state; it is never persisted and
/// `Debug` output redacts it.
#[derive(Debug)]
pub struct PasswordMeter {
    password: SecretString,
    config: MeterConfig,
}

impl PasswordMeter {
    /// Creates a meter with an empty password.
    pub fn new(config: MeterConfig) -> Self {
        Self {
            password: SecretString::new(String::new().into()),
            config,
        }
    }

    /// Replaces the password with the literal new value.
    ///
    /// No trimming and no validation; any string is accepted.
    pub fn change_password(&mut self, password: String) {
        self.password = SecretString::new(password.into());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "password changed: {} chars",
            self.password.expose_secret().chars().count()
        );
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn rules(&self) -> &RuleSet {
        &self.config.rules
    }

    pub fn evaluation(&self) -> Evaluation {
        evaluate(self.password.expose_secret(), &self.config.rules)
    }

    /// Derives the feedback for the current password.
    pub fn render(&self) -> Feedback {
        let feedback = Feedback::from_evaluation(&self.evaluation());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "rendered feedback: {:?} for {} chars",
            feedback.tier,
            self.password.expose_secret().chars().count()
        );

        feedback
    }
}

impl Default for PasswordMeter {
    fn default() -> Self {
        Self::new(MeterConfig::default())
    }
}

//! Feedback view model.
//!
//! Plain data a UI layer draws: the field label and validation state, the
//! progress bar, and the rule checklist. Built from one [`Evaluation`].

use crate::evaluator::Evaluation;
use crate::strength::{ProgressStyle, StrengthTier, ValidationState};

/// Everything the meter shows for the current password.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub tier: StrengthTier,
    pub label: &'static str,
    pub validation: ValidationState,
    pub progress: Progress,
    pub checklist: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Fill level in `[0.0, 100.0]`.
    pub percent: f64,
    pub style: ProgressStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub label: String,
    pub style: CheckStyle,
}

/// Text color of a checklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStyle {
    Satisfied,
    Unsatisfied,
}

impl CheckStyle {
    pub fn from_satisfied(satisfied: bool) -> Self {
        if satisfied {
            CheckStyle::Satisfied
        } else {
            CheckStyle::Unsatisfied
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CheckStyle::Satisfied => "text-success",
            CheckStyle::Unsatisfied => "text-danger",
        }
    }
}

impl Feedback {
    pub fn from_evaluation(evaluation: &Evaluation) -> Self {
        let tier = evaluation.tier();
        let checklist = evaluation
            .checks
            .iter()
            .map(|check| ChecklistItem {
                label: check.label.clone(),
                style: CheckStyle::from_satisfied(check.satisfied),
            })
            .collect();

        Feedback {
            tier,
            label: tier.label(),
            validation: tier.validation_state(),
            progress: Progress {
                percent: evaluation.percent(),
                style: tier.progress_style(),
            },
            checklist,
        }
    }
}

impl From<&Evaluation> for Feedback {
    fn from(evaluation: &Evaluation) -> Self {
        Feedback::from_evaluation(evaluation)
    }
}

//! Strength tiers and the presentation styles derived from them.
//!
//! [`StrengthTier::from_fraction`] is the only classifier in the crate.
//! Progress style, validation state and label all come from its result.

/// Lower bound of the medium tier, in tenths of a percent (33.4%).
const MEDIUM_FROM_TENTHS: u32 = 334;
/// Lower bound of the strong tier, in tenths of a percent (66.7%).
const STRONG_FROM_TENTHS: u32 = 667;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// Classifies a satisfaction fraction.
    ///
    /// The percentage is rounded to tenths before comparing, so 2/3 reads
    /// as 66.7% (strong) and 1/3 as 33.3% (weak). Lower bounds are
    /// inclusive. Half-tenths round up, so 33.35% already counts as medium.
    /// NaN and negative input classify as weak.
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction.is_nan() || fraction <= 0.0 {
            return StrengthTier::Weak;
        }
        let tenths = (fraction.min(1.0) * 1000.0).round() as u32;
        if tenths >= STRONG_FROM_TENTHS {
            StrengthTier::Strong
        } else if tenths >= MEDIUM_FROM_TENTHS {
            StrengthTier::Medium
        } else {
            StrengthTier::Weak
        }
    }

    /// Status label shown above the password field.
    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Weak => "Bad Password",
            StrengthTier::Medium => "Can-be-better Password",
            StrengthTier::Strong => "Great Password",
        }
    }

    pub fn progress_style(self) -> ProgressStyle {
        match self {
            StrengthTier::Weak => ProgressStyle::Danger,
            StrengthTier::Medium => ProgressStyle::Warning,
            StrengthTier::Strong => ProgressStyle::Success,
        }
    }

    pub fn validation_state(self) -> ValidationState {
        match self {
            StrengthTier::Weak => ValidationState::Error,
            StrengthTier::Medium => ValidationState::Warning,
            StrengthTier::Strong => ValidationState::Success,
        }
    }
}

/// Color of the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressStyle {
    Danger,
    Warning,
    Success,
}

impl ProgressStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            ProgressStyle::Danger => "danger",
            ProgressStyle::Warning => "warning",
            ProgressStyle::Success => "success",
        }
    }
}

/// Decoration of the password input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationState {
    Error,
    Warning,
    Success,
}

impl ValidationState {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationState::Error => "error",
            ValidationState::Warning => "warning",
            ValidationState::Success => "success",
        }
    }
}

//! Password strength meter library
//!
//! Checks a password against an ordered set of labelled rules and builds
//! the live feedback a form shows while the user types: a progress bar, a
//! color-coded status label and a checklist of satisfied rules.
//!
//! # Features
//!
//! - `async` (default): Enables the channel-driven [`run_meter`] loop with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Custom path to blacklist file, read only by
//!   [`Blacklist::from_env`] (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{PasswordMeter, StrengthTier};
//!
//! let mut meter = PasswordMeter::default();
//! meter.change_password("abc12!".to_string());
//!
//! let feedback = meter.render();
//! assert_eq!(feedback.tier, StrengthTier::Strong);
//! assert_eq!(feedback.label, "Great Password");
//! assert_eq!(feedback.progress.style.as_str(), "success");
//! for item in &feedback.checklist {
//!     println!("{} [{}]", item.label, item.style.as_str());
//! }
//! ```
//!
//! Custom rules:
//!
//! ```rust
//! use pwd_meter::{MeterConfig, PasswordMeter, Rule, RuleSet, predicates};
//!
//! let rules = RuleSet::empty()
//!     .with(Rule::new("10+ characters", predicates::min_length(10)))
//!     .with(Rule::new("no sequences", predicates::no_sequence(4)));
//! let meter = PasswordMeter::new(MeterConfig::with_rules(rules));
//! assert_eq!(meter.render().checklist.len(), 2);
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod feedback;
mod meter;
mod rule;
mod strength;

#[cfg(feature = "async")]
mod driver;

pub mod predicates;

// Public API
pub use blacklist::{Blacklist, BlacklistError, get_blacklist_path};
pub use evaluator::{Evaluation, RuleCheck, evaluate};
pub use feedback::{CheckStyle, ChecklistItem, Feedback, Progress};
pub use meter::{MeterConfig, PasswordMeter};
pub use rule::{Predicate, Rule, RuleSet};
pub use strength::{ProgressStyle, StrengthTier, ValidationState};

#[cfg(feature = "async")]
pub use driver::run_meter;

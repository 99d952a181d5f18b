//! Predicate constructors
//!
//! Each constructor returns a pure `Fn(&str) -> bool` that can be wrapped
//! in a [`Rule`](crate::Rule). Only `min_length`, `has_digit` and
//! `has_special` feed the default rule set; the rest are opt-in.

mod blacklist;
mod length;
mod pattern;
mod variety;

pub use blacklist::not_blacklisted;
pub use length::min_length;
pub use pattern::{no_repeated_run, no_sequence};
pub use variety::{has_digit, has_lowercase, has_special, has_uppercase};

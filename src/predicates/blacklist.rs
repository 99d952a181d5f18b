//! Blacklist predicate - rejects common passwords.

use crate::blacklist::Blacklist;

/// Satisfied when the password is not in `blacklist` (case-insensitive).
pub fn not_blacklisted(blacklist: Blacklist) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    move |password: &str| !blacklist.contains(password)
}

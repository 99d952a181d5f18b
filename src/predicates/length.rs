//! Length predicate.

/// Satisfied when the password has at least `min` characters.
///
/// Characters are Unicode scalar values, not bytes.
pub fn min_length(min: usize) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    move |password: &str| password.chars().count() >= min
}

//! Pattern predicates - detect repetitive and sequential runs.

/// Satisfied when no character repeats `run` or more times in a row.
///
/// A `run` below 2 can never be satisfied by a non-empty password.
pub fn no_repeated_run(run: usize) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    move |password: &str| {
        let mut prev: Option<char> = None;
        let mut count = 0usize;
        for c in password.chars() {
            if prev == Some(c) {
                count += 1;
            } else {
                prev = Some(c);
                count = 1;
            }
            if count >= run {
                return false;
            }
        }
        true
    }
}

/// Satisfied when no window of `len` characters forms an ascending or
/// descending sequence ("1234", "dcba").
pub fn no_sequence(len: usize) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    move |password: &str| {
        let chars: Vec<char> = password.chars().collect();
        if len < 2 || chars.len() < len {
            return true;
        }

        !chars.windows(len).any(|window| {
            let steps: Vec<i64> = window
                .windows(2)
                .map(|w| w[1] as i64 - w[0] as i64)
                .collect();
            steps.iter().all(|&s| s == 1) || steps.iter().all(|&s| s == -1)
        })
    }
}

//! Common validation utilities

/// Common validation functions
pub mod validators {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static EMAIL_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

    /// Check if a string is not empty after trimming
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.len();
        len >= min && len <= max
    }

    /// Check if an email address is valid (basic check)
    pub fn is_valid_email(value: &str) -> bool {
        EMAIL_PATTERN.is_match(value)
    }

    /// Check if a monthly rent amount is plausible (positive, below sanity cap)
    pub fn is_plausible_rent(amount: u64) -> bool {
        amount > 0 && amount <= 100_000_000
    }
}

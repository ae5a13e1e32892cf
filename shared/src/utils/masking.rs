//! Masking helpers for values that must not appear in logs

/// Mask a sensitive value, keeping only the last 4 characters visible.
///
/// # Example
///
/// ```ignore
/// assert_eq!(mask_value("client-1234abcd"), "***********abcd");
/// ```
pub fn mask_value(value: &str) -> String {
    let visible = 4;
    let len = value.chars().count();
    if len <= visible {
        return "*".repeat(len);
    }

    let tail: String = value.chars().skip(len - visible).collect();
    format!("{}{}", "*".repeat(len - visible), tail)
}

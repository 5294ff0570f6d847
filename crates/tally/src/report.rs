//!
//! Formatting for the benchmark's single report line.
//!

/// Render the fixed-format result line for a computed total.
///
/// The shape is a contract: callers time the binary externally and match on
/// the literal `total = ` prefix, so the value stays plain decimal with no
/// separators.
#[must_use]
pub fn total_line(total: u64) -> String {
    format!("total = {total}")
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::total_line;

    #[test]
    fn renders_the_shipped_total() {
        assert_eq!(total_line(49_999_995_000_000), "total = 49999995000000");
    }

    #[test]
    fn renders_zero_and_small_values_in_plain_decimal() {
        assert_eq!(total_line(0), "total = 0");
        assert_eq!(total_line(45), "total = 45");
    }
}

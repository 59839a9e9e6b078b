//! Human-readable value formatting.

use std::time::Duration;

/// Fixed widths for the minute/second/millisecond/microsecond fields.
const TIME_FIELD_WIDTHS: [usize; 4] = [3, 2, 3, 3];

/// Format an integer with a `'` grouping separator every three digits,
/// counting from the least-significant digit: `1234567` → `1'234'567`.
pub fn readable(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\'');
        }
        out.push(c);
    }
    out
}

/// Render a duration as `"{minutes}m {seconds}s {milliseconds}ms {microseconds}us"`
/// with fixed sub-field widths; sub-microsecond precision is truncated.
pub fn readable_duration(duration: Duration) -> String {
    let total_micros = duration.as_micros();
    let minutes = total_micros / 60_000_000;
    let seconds = (total_micros / 1_000_000) % 60;
    let millis = (total_micros / 1_000) % 1_000;
    let micros = total_micros % 1_000;
    format!(
        "{minutes:>w0$}m {seconds:>w1$}s {millis:>w2$}ms {micros:>w3$}us",
        w0 = TIME_FIELD_WIDTHS[0],
        w1 = TIME_FIELD_WIDTHS[1],
        w2 = TIME_FIELD_WIDTHS[2],
        w3 = TIME_FIELD_WIDTHS[3],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_every_three_digits() {
        assert_eq!(readable(0), "0");
        assert_eq!(readable(999), "999");
        assert_eq!(readable(1_000), "1'000");
        assert_eq!(readable(1_234_567), "1'234'567");
        assert_eq!(readable(1_000_000_000), "1'000'000'000");
    }

    #[test]
    fn duration_fields_decompose_total_microseconds() {
        let d = Duration::from_micros(61_001_001); // 1m 1s 1ms 1us
        assert_eq!(readable_duration(d), "  1m  1s   1ms   1us");
    }

    #[test]
    fn zero_duration_renders_all_zero_fields() {
        assert_eq!(readable_duration(Duration::ZERO), "  0m  0s   0ms   0us");
    }

    #[test]
    fn sub_microsecond_precision_truncates() {
        let d = Duration::from_nanos(1_999);
        assert_eq!(readable_duration(d), "  0m  0s   0ms   1us");
    }

    #[test]
    fn wide_minute_counts_still_render() {
        let d = Duration::from_secs(100 * 60 + 5);
        assert_eq!(readable_duration(d), "100m  5s   0ms   0us");
    }
}

//! Display formatting for accepted files.

/// Bytes per displayed megabyte (binary megabyte, 1024 * 1024).
pub const BYTES_PER_MEGABYTE: u64 = 1024 * 1024;

/// Format a byte count as megabytes with two decimals, e.g. `"1.00 MB"`.
///
/// Exact halves round up (`0.125` shows as `"0.13 MB"`), matching how
/// browsers render `Number.toFixed(2)` for these values.
#[must_use]
pub fn format_megabytes(bytes: u64) -> String {
    let per_mb = u128::from(BYTES_PER_MEGABYTE);
    let hundredths = (u128::from(bytes) * 100 + per_mb / 2) / per_mb;
    format!("{}.{:02} MB", hundredths / 100, hundredths % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_megabytes() {
        assert_eq!(format_megabytes(1_048_576), "1.00 MB");
        assert_eq!(format_megabytes(2_097_152), "2.00 MB");
    }

    #[test]
    fn empty_file() {
        assert_eq!(format_megabytes(0), "0.00 MB");
    }

    #[test]
    fn small_files_round_to_hundredths() {
        // 10 KiB is ~0.0098 MB.
        assert_eq!(format_megabytes(10 * 1024), "0.01 MB");
        assert_eq!(format_megabytes(1), "0.00 MB");
    }

    #[test]
    fn fractional_megabytes() {
        // 1.5 MiB
        assert_eq!(format_megabytes(1_572_864), "1.50 MB");
        // 3.25 MiB
        assert_eq!(format_megabytes(3_407_872), "3.25 MB");
    }

    #[test]
    fn exact_halves_round_up() {
        // 0.125 MiB
        assert_eq!(format_megabytes(131_072), "0.13 MB");
        // 1.375 MiB
        assert_eq!(format_megabytes(1_441_792), "1.38 MB");
        // Either side of 0.005 MiB.
        assert_eq!(format_megabytes(5_243), "0.01 MB");
        assert_eq!(format_megabytes(5_242), "0.00 MB");
    }

    #[test]
    fn largest_size_does_not_overflow() {
        assert!(format_megabytes(u64::MAX).ends_with(" MB"));
    }

    #[test]
    fn large_files_do_not_switch_units() {
        assert_eq!(format_megabytes(5 * 1024 * BYTES_PER_MEGABYTE), "5120.00 MB");
    }
}

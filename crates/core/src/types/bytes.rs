//! Byte-count type with a derived human-readable display.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A non-negative byte count.
///
/// The human-readable form ("2.4 MB") is always derived from the count, so
/// the displayed size and the value used for sorting and range filters can
/// never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ByteSize(u64);

/// Decimal units, largest first.
const UNITS: [(u64, &str); 4] = [
    (1_000_000_000_000, "TB"),
    (1_000_000_000, "GB"),
    (1_000_000, "MB"),
    (1_000, "KB"),
];

impl ByteSize {
    /// Create a byte size from a raw count.
    #[must_use]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Create a byte size from whole kilobytes.
    #[must_use]
    pub const fn from_kb(kb: u64) -> Self {
        Self(kb * 1_000)
    }

    /// Create a byte size from whole megabytes.
    #[must_use]
    pub const fn from_mb(mb: u64) -> Self {
        Self(mb * 1_000_000)
    }

    /// Create a byte size from whole gigabytes.
    #[must_use]
    pub const fn from_gb(gb: u64) -> Self {
        Self(gb * 1_000_000_000)
    }

    /// Get the underlying byte count.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Render the count with its largest fitting decimal unit, one decimal
    /// place, trailing zeros trimmed ("2.4 MB", "450 KB", "12 KB").
    #[must_use]
    pub fn display(&self) -> String {
        for (scale, unit) in UNITS {
            if self.0 >= scale {
                #[allow(clippy::cast_precision_loss)] // display only
                let value = self.0 as f64 / scale as f64;
                let mut text = format!("{value:.1}");
                if let Some(stripped) = text.strip_suffix(".0") {
                    text = stripped.to_string();
                }
                return format!("{text} {unit}");
            }
        }
        format!("{} B", self.0)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<ByteSize> for u64 {
    fn from(size: ByteSize) -> Self {
        size.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_megabytes() {
        assert_eq!(ByteSize::new(2_400_000).display(), "2.4 MB");
        assert_eq!(ByteSize::new(75_400_000).display(), "75.4 MB");
    }

    #[test]
    fn test_display_trims_whole_values() {
        assert_eq!(ByteSize::new(450_000).display(), "450 KB");
        assert_eq!(ByteSize::new(12_000).display(), "12 KB");
        assert_eq!(ByteSize::from_gb(100).display(), "100 GB");
    }

    #[test]
    fn test_display_small_and_zero() {
        assert_eq!(ByteSize::new(0).display(), "0 B");
        assert_eq!(ByteSize::new(999).display(), "999 B");
    }

    #[test]
    fn test_ordering_matches_bytes() {
        assert!(ByteSize::from_kb(450) < ByteSize::from_mb(1));
        assert!(ByteSize::from_gb(1) > ByteSize::from_mb(999));
    }

    #[test]
    fn test_constructors() {
        assert_eq!(ByteSize::from_mb(2).as_u64(), 2_000_000);
        assert_eq!(ByteSize::from_gb(1).as_u64(), 1_000_000_000);
    }
}

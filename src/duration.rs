//! Go-style duration strings for Consul payloads and query parameters

use std::time::Duration;

/// Encode a duration the way the Consul API expects it ("30s", "1.5m").
///
/// Anything under one minute renders as whole (truncated) seconds; one
/// minute and above renders as a fractional minute value. Consul accepts
/// fractional minute strings, so no rounding is applied.
pub fn encode(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 60.0 {
        format!("{}s", secs as u64)
    } else {
        // {:?} always keeps the decimal point: 1.0, 1.5, 1.6666666666666667
        format!("{:?}m", secs / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_seconds() {
        assert_eq!(encode(Duration::from_secs(0)), "0s");
        assert_eq!(encode(Duration::from_secs(10)), "10s");
        assert_eq!(encode(Duration::from_secs(59)), "59s");
    }

    #[test]
    fn test_encode_truncates_fractional_seconds() {
        assert_eq!(encode(Duration::from_millis(2700)), "2s");
    }

    #[test]
    fn test_encode_minute_boundary() {
        // exactly 60 seconds already falls into the minutes branch
        assert_eq!(encode(Duration::from_secs(60)), "1.0m");
    }

    #[test]
    fn test_encode_minutes() {
        assert_eq!(encode(Duration::from_secs(90)), "1.5m");
        assert_eq!(encode(Duration::from_secs(150)), "2.5m");
        assert_eq!(encode(Duration::from_secs(100)), "1.6666666666666667m");
    }
}

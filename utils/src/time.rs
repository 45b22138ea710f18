//! Formatting helpers for durations and amounts in human-facing strings.

/// Format a duration in seconds to a human-readable string.
pub fn format_duration(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}

/// Format a microSTX amount as whole STX with up to six decimal places.
pub fn format_stx(ustx: u64) -> String {
    let whole = ustx / 1_000_000;
    let frac = ustx % 1_000_000;
    if frac == 0 {
        format!("{whole} STX")
    } else {
        let s = format!("{frac:06}");
        format!("{}.{} STX", whole, s.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(format_duration(45), "45s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(7260), "2h 1m");
        assert_eq!(format_duration(90000), "1d 1h");
    }

    #[test]
    fn stx_amounts() {
        assert_eq!(format_stx(100_000), "0.1 STX");
        assert_eq!(format_stx(1_000_000), "1 STX");
        assert_eq!(format_stx(1_500_000), "1.5 STX");
        assert_eq!(format_stx(123), "0.000123 STX");
    }
}

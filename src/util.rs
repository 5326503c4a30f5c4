//! Shared utility functions.

/// Convert a length in milliseconds to a compact string.
///
/// Whole days, hours, minutes and seconds are listed largest first and zero
/// parts are skipped: 2_628_000_000 -> "30d 10h", 1_500 -> "1s 500ms".
pub fn human_millis(ms: u64) -> String {
    const PARTS: [(u64, &str); 5] = [
        (86_400_000, "d"),
        (3_600_000, "h"),
        (60_000, "m"),
        (1_000, "s"),
        (1, "ms"),
    ];

    if ms == 0 {
        return "0ms".to_string();
    }

    let mut rest = ms;
    let mut out = Vec::new();
    for (size, suffix) in PARTS {
        let count = rest / size;
        if count > 0 {
            out.push(format!("{count}{suffix}"));
            rest %= size;
        }
    }
    out.join(" ")
}

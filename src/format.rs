use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const STEP: u64 = 1024;

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

/// Human-readable base-1024 size, e.g. `1536` -> `"1.5 KB"`.
///
/// The scaled value is rounded to two decimals and printed without trailing
/// zeros. `is_rate` appends `/s`. Zero is always `"0 B"`, without a rate
/// suffix. Values past the largest unit stay in TB.
pub fn format_bytes(bytes: u64, is_rate: bool) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut index = 0;
    while index + 1 < UNITS.len() && bytes >= STEP.pow(index as u32 + 1) {
        index += 1;
    }

    let scaled = bytes as f64 / STEP.pow(index as u32) as f64;
    let rounded = (scaled * 100.0).round() / 100.0;
    let suffix = if is_rate { "/s" } else { "" };
    format!("{rounded} {}{suffix}", UNITS[index])
}

// Zero code points of the Unicode decimal digit runs (general category Nd)
// in the Basic Multilingual Plane. Each run holds `0` through `9` in order.
const DECIMAL_ZEROS: &[u32] = &[
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0,
    0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0,
    0xAA50, 0xABF0, 0xFF10,
];

pub fn extract_digits(raw: Option<&str>) -> String {
    let trimmed = clean_text(raw);
    if trimmed.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(trimmed.len() + 1);
    if trimmed.starts_with('+') {
        out.push('+');
    }

    let mut saw_digit = false;
    for ch in trimmed.chars() {
        if let Some(digit) = ascii_digit(ch) {
            out.push(digit);
            saw_digit = true;
        }
    }

    if !saw_digit {
        return String::new();
    }

    out
}

fn ascii_digit(ch: char) -> Option<char> {
    if ch.is_ascii_digit() {
        return Some(ch);
    }
    let code = u32::from(ch);
    DECIMAL_ZEROS
        .iter()
        .find(|zero| (**zero..**zero + 10).contains(&code))
        .and_then(|zero| char::from_digit(code - zero, 10))
}

// Dataframes spell an empty cell `nan`.
pub(crate) fn clean_text(raw: Option<&str>) -> &str {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.eq_ignore_ascii_case("nan") {
        return "";
    }
    trimmed
}

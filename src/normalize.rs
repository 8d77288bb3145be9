use once_cell::sync::Lazy;
use regex::Regex;

/// Bracketed annotations ("[1]", "[nota 2]") and bare digit runs left over
/// from footnote markers.
static ANNOTATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]|\d+").unwrap());

/// Cleans one raw country name into its lowercase matching key.
///
/// The page decorates names with footnote markers, metadata after a
/// non-breaking space, zero-width spaces, and the occasional repeated word
/// from nested markup ("France France"). Each step feeds the next:
/// lowercase and trim, cut at the first non-breaking space, strip
/// annotations and digits, drop zero-width spaces, then deduplicate tokens
/// preserving first occurrence.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let prefix = lowered.split('\u{a0}').next().unwrap_or("");
    let stripped = ANNOTATION_RE.replace_all(prefix, "");
    let cleaned: String = stripped.chars().filter(|&c| c != '\u{200b}').collect();

    let mut words: Vec<&str> = Vec::new();
    for word in cleaned.split_whitespace() {
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words.join(" ")
}

/// Display form of a normalized name: a letter that follows a
/// non-alphabetic character is uppercased ("guinea-bissau" ->
/// "Guinea-Bissau"), everything else lowercased.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_alphabetic = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}

/// Parses a population figure, tolerating `.` and `,` thousands separators
/// and non-breaking spaces. Unparseable text ("N/D") becomes `None` so one
/// bad cell never aborts the rest of the batch.
pub fn parse_population(raw: &str) -> Option<u64> {
    let digits: String = raw
        .chars()
        .filter(|&c| c != '.' && c != ',' && c != '\u{a0}')
        .collect();
    digits.trim().parse().ok()
}

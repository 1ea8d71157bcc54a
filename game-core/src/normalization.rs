use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block, dropped after canonical decomposition
fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Lowercase, trim and strip accents so guesses compare accent- and case-insensitively
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_diacritic(*c))
        .collect();
    stripped.trim().to_string()
}

/// Exact match after normalization; no fuzzy or partial matching
pub fn is_correct_guess(guess: &str, answer: &str) -> bool {
    normalize(guess) == normalize(answer)
}

/// Normalize user text for phrase matching: strip invisible format
/// characters, fold every Unicode whitespace character to an ASCII space,
/// then lower-case once.
///
/// Both steps only touch characters that render as nothing or as a blank,
/// so they cannot produce a match the visible text does not contain. They
/// close the gaps where `kill\u{200B} myself` or `kill\u{00A0}myself` would
/// otherwise slip past.
pub fn normalize_text(text: &str) -> String {
    fold_whitespace(&remove_invisible_unicode(text)).to_lowercase()
}

/// Normalize a catalog phrase the same way input text is normalized, and
/// trim surrounding whitespace.
pub fn normalize_phrase(phrase: &str) -> String {
    normalize_text(phrase.trim())
}

fn remove_invisible_unicode(text: &str) -> String {
    text.chars().filter(|c| !is_invisible(*c)).collect()
}

/// Any `char::is_whitespace` character, no-break space included, becomes `' '`.
fn fold_whitespace(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}

fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{200B}'..='\u{200F}'   // Zero-width chars, LRM/RLM
        | '\u{202A}'..='\u{202E}' // Directional formatting
        | '\u{2060}'..='\u{2064}' // Invisible operators
        | '\u{2066}'..='\u{2069}' // Directional isolates
        | '\u{FEFF}'              // BOM
        | '\u{00AD}'              // Soft hyphen
        | '\u{034F}'              // Combining grapheme joiner
        | '\u{061C}'              // Arabic letter mark
        | '\u{180E}'              // Mongolian vowel separator
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases() {
        assert_eq!(normalize_text("I Want To DIE"), "i want to die");
    }

    #[test]
    fn strips_zero_width_characters() {
        assert_eq!(normalize_text("kill\u{200B} my\u{200D}self"), "kill myself");
        assert_eq!(normalize_text("\u{FEFF}sui\u{00AD}cide"), "suicide");
    }

    #[test]
    fn keeps_punctuation_and_folds_whitespace() {
        assert_eq!(normalize_text("Fine,\tthanks!\n"), "fine, thanks! ");
    }

    #[test]
    fn unicode_spaces_fold_to_ascii_space() {
        assert_eq!(normalize_text("kill\u{00A0}myself"), "kill myself");
        assert_eq!(normalize_text("end\u{2007}my\u{202F}life"), "end my life");
        assert_eq!(normalize_text("want\u{3000}to\u{2028}die"), "want to die");
    }

    #[test]
    fn non_ascii_lowercase() {
        assert_eq!(normalize_text("ÉTAT"), "état");
    }

    #[test]
    fn phrase_is_trimmed() {
        assert_eq!(normalize_phrase("  Self Harm "), "self harm");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize_text(""), "");
    }
}

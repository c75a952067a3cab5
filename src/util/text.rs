//! Character classification and folding helpers for literal search

/// Check if a character is a word character (alphanumeric or underscore)
///
/// Word characters delimit whole-word matches: an exact match must not be
/// directly preceded or followed by one.
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Fold a character for case-insensitive comparison.
///
/// Uses the simple lowercase mapping, then merges lowercase variants that
/// share an uppercase form (`ς`/`σ`, `ſ`/`s`, micro sign/`μ`). Characters
/// whose lowercase form expands to more than one char are returned unchanged,
/// so a folded string always has the same char length as the original.
#[inline]
pub fn fold_char(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    let folded = match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => return ch,
    };
    match folded {
        'ς' => 'σ',
        'ſ' => 's',
        '\u{b5}' => '\u{3bc}',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(is_word_char('é'));
        assert!(is_word_char('日'));
    }

    #[test]
    fn test_non_word_chars() {
        assert!(!is_word_char(' '));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('.'));
        assert!(!is_word_char('\n'));
        assert!(!is_word_char('\t'));
    }

    #[test]
    fn test_fold_ascii() {
        assert_eq!(fold_char('A'), 'a');
        assert_eq!(fold_char('a'), 'a');
        assert_eq!(fold_char('1'), '1');
    }

    #[test]
    fn test_fold_unicode_single_char() {
        assert_eq!(fold_char('Ö'), 'ö');
        assert_eq!(fold_char('Σ'), 'σ');
    }

    #[test]
    fn test_fold_merges_lowercase_variants() {
        assert_eq!(fold_char('ς'), fold_char('Σ'));
        assert_eq!(fold_char('ς'), fold_char('σ'));
        assert_eq!(fold_char('ſ'), fold_char('S'));
        assert_eq!(fold_char('\u{b5}'), fold_char('\u{39c}'));
    }

    #[test]
    fn test_fold_multi_char_lowercase_is_identity() {
        // 'İ' lowercases to "i\u{307}"
        assert_eq!(fold_char('İ'), 'İ');
    }
}

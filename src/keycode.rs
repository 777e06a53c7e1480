//! Character → ZMK keycode table.
//!
//! A character is usable in a morph value only if it has an entry here. The
//! same table drives verification (presence) and macro emission (the token).
//!
//! Lower-case ASCII letters map to their bare key token and upper-case letters
//! to the `LS(..)` shifted form. Everything else is listed explicitly,
//! including typographic quotes and the two arrow/return glyphs.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Explicit entries besides the letter rule.
const SYMBOL_KEYCODES: &[(char, &str)] = &[
    ('0', "N0"),
    ('1', "N1"),
    ('2', "N2"),
    ('3', "N3"),
    ('4', "N4"),
    ('5', "N5"),
    ('6', "N6"),
    ('7', "N7"),
    ('8', "N8"),
    ('9', "N9"),
    (' ', "SPACE"),
    ('!', "EXCL"),
    ('@', "AT"),
    ('#', "HASH"),
    ('$', "DLLR"),
    ('%', "PRCNT"),
    ('^', "CARET"),
    ('&', "AMPS"),
    ('*', "STAR"),
    ('(', "LPAR"),
    (')', "RPAR"),
    ('=', "EQUAL"),
    ('+', "PLUS"),
    ('-', "MINUS"),
    ('_', "UNDER"),
    ('/', "FSLH"),
    ('?', "QMARK"),
    ('\\', "BSLH"),
    ('|', "PIPE"),
    (';', "SEMI"),
    (':', "COLON"),
    ('\'', "APOS"),
    ('\u{2018}', "APOS"),
    ('\u{2019}', "APOS"),
    ('"', "DQT"),
    ('\u{201C}', "DQT"),
    ('\u{201D}', "DQT"),
    (',', "COMMA"),
    ('.', "DOT"),
    ('>', "GT"),
    ('<', "LT"),
    ('[', "LBKT"),
    (']', "RBKT"),
    ('{', "LBRC"),
    ('}', "RBRC"),
    ('`', "GRAVE"),
    ('~', "TILDE"),
    ('\u{2190}', "LEFT"),
    ('\u{23CE}', "RET"),
    ('\u{00E9}', "E"),
];

const LETTERS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

const SHIFTED_LETTERS: [&str; 26] = [
    "LS(A)", "LS(B)", "LS(C)", "LS(D)", "LS(E)", "LS(F)", "LS(G)", "LS(H)", "LS(I)", "LS(J)",
    "LS(K)", "LS(L)", "LS(M)", "LS(N)", "LS(O)", "LS(P)", "LS(Q)", "LS(R)", "LS(S)", "LS(T)",
    "LS(U)", "LS(V)", "LS(W)", "LS(X)", "LS(Y)", "LS(Z)",
];

static KEYCODES: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(SYMBOL_KEYCODES.len() + 52);
    for (i, c) in ('a'..='z').enumerate() {
        map.insert(c, LETTERS[i]);
    }
    for (i, c) in ('A'..='Z').enumerate() {
        map.insert(c, SHIFTED_LETTERS[i]);
    }
    map.extend(SYMBOL_KEYCODES.iter().copied());
    map
});

/// ZMK key token for `c`, or `None` if `c` cannot be typed.
///
/// ```
/// use antmorph::keycode::zmk_keycode;
///
/// assert_eq!(zmk_keycode('a'), Some("A"));
/// assert_eq!(zmk_keycode('A'), Some("LS(A)"));
/// assert_eq!(zmk_keycode('{'), Some("LBRC"));
/// assert_eq!(zmk_keycode('\u{00A7}'), None);
/// ```
#[inline]
pub fn zmk_keycode(c: char) -> Option<&'static str> {
    KEYCODES.get(&c).copied()
}

/// Whether `c` has a keycode.
#[inline]
pub fn is_known(c: char) -> bool {
    KEYCODES.contains_key(&c)
}

/// First character of `text` without a keycode, if any.
pub fn first_unknown(text: &str) -> Option<char> {
    text.chars().find(|&c| !is_known(c))
}

/// Every (character, token) pair in the table, in no particular order.
pub fn entries() -> impl Iterator<Item = (char, &'static str)> {
    KEYCODES.iter().map(|(&c, &code)| (c, code))
}

/// Number of characters in the table.
pub fn len() -> usize {
    KEYCODES.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::antecedents::AntecedentType;

    #[test]
    fn every_entry_has_a_token() {
        for (c, code) in entries() {
            assert!(!code.is_empty(), "empty token for {c:?}");
        }
        assert_eq!(len(), 26 * 2 + SYMBOL_KEYCODES.len());
    }

    #[test]
    fn letters_follow_shift_rule() {
        for (lower, upper) in ('a'..='z').zip('A'..='Z') {
            let bare = zmk_keycode(lower).unwrap();
            assert_eq!(zmk_keycode(upper).unwrap(), format!("LS({bare})"));
        }
    }

    #[test]
    fn typographic_variants_share_tokens() {
        assert_eq!(zmk_keycode('\u{2018}'), zmk_keycode('\''));
        assert_eq!(zmk_keycode('\u{201D}'), zmk_keycode('"'));
        assert_eq!(zmk_keycode('\u{2190}'), Some("LEFT"));
        assert_eq!(zmk_keycode('\u{23CE}'), Some("RET"));
    }

    #[test]
    fn every_antecedent_symbol_is_typeable() {
        for a in AntecedentType::ALL {
            assert!(is_known(a.symbol()), "{a} has no keycode");
        }
    }

    #[test]
    fn unknown_characters() {
        assert!(!is_known('\u{00A7}'));
        assert!(!is_known('\t'));
        assert_eq!(first_unknown("ab\u{00A7}c\u{00B6}"), Some('\u{00A7}'));
        assert_eq!(first_unknown("hello world"), None);
    }
}

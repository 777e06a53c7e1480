//! The 62 antecedent characters and their static per-type data.
//!
//! An antecedent is the key typed *before* a gesture. Its display symbol,
//! firmware codes, and hand assignment are looked up from [`ANTECEDENT_TABLE`]
//! and never stored in a document.

use std::fmt;

use crate::layout::Hand;

/// Static description of one antecedent character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AntecedentInfo {
    /// Visible symbol (upper-case for letters).
    pub symbol: char,
    /// ZMK antecedent code: HID usage on page 0x07, with the implicit-shift
    /// bit (0x02000000) for symbols that need Shift.
    pub zmk_code: &'static str,
    /// QMK keycode name.
    pub qmk_code: &'static str,
    /// Hand that types the key on a QWERTY layout.
    pub hand: Hand,
}

const fn info(symbol: char, zmk_code: &'static str, qmk_code: &'static str, hand: Hand) -> AntecedentInfo {
    AntecedentInfo {
        symbol,
        zmk_code,
        qmk_code,
        hand,
    }
}

use Hand::{Left as LH, Right as RH};

/// Per-type data, indexed by [`AntecedentType::id`].
pub static ANTECEDENT_TABLE: [AntecedentInfo; AntecedentType::COUNT] = [
    info('A', "0x070004", "KC_A", LH),
    info('B', "0x070005", "KC_B", LH),
    info('C', "0x070006", "KC_C", LH),
    info('D', "0x070007", "KC_D", LH),
    info('E', "0x070008", "KC_E", LH),
    info('F', "0x070009", "KC_F", LH),
    info('G', "0x07000a", "KC_G", LH),
    info('H', "0x07000b", "KC_H", RH),
    info('I', "0x07000c", "KC_I", RH),
    info('J', "0x07000d", "KC_J", RH),
    info('K', "0x07000e", "KC_K", RH),
    info('L', "0x07000f", "KC_L", RH),
    info('M', "0x070010", "KC_M", RH),
    info('N', "0x070011", "KC_N", RH),
    info('O', "0x070012", "KC_O", RH),
    info('P', "0x070013", "KC_P", RH),
    info('Q', "0x070014", "KC_Q", LH),
    info('R', "0x070015", "KC_R", LH),
    info('S', "0x070016", "KC_S", LH),
    info('T', "0x070017", "KC_T", LH),
    info('U', "0x070018", "KC_U", RH),
    info('V', "0x070019", "KC_V", LH),
    info('W', "0x07001a", "KC_W", LH),
    info('X', "0x07001b", "KC_X", LH),
    info('Y', "0x07001c", "KC_Y", RH),
    info('Z', "0x07001d", "KC_Z", LH),
    info('0', "0x070027", "KC_0", RH),
    info('1', "0x07001e", "KC_1", LH),
    info('2', "0x07001f", "KC_2", LH),
    info('3', "0x070020", "KC_3", LH),
    info('4', "0x070021", "KC_4", LH),
    info('5', "0x070022", "KC_5", LH),
    info('6', "0x070023", "KC_6", RH),
    info('7', "0x070024", "KC_7", RH),
    info('8', "0x070025", "KC_8", RH),
    info('9', "0x070026", "KC_9", RH),
    info(',', "0x070036", "KC_COMM", RH),
    info('.', "0x070037", "KC_DOT", RH),
    info('\'', "0x070034", "KC_QUOT", RH),
    info('/', "0x070038", "KC_SLSH", RH),
    info('{', "0x0207002f", "KC_LCBR", RH),
    info('}', "0x02070030", "KC_RCBR", RH),
    info('(', "0x02070026", "KC_LPRN", RH),
    info(')', "0x02070027", "KC_RPRN", RH),
    info('*', "0x02070025", "KC_ASTR", RH),
    info(':', "0x02070033", "KC_COLN", RH),
    info('$', "0x02070021", "KC_DLR", LH),
    info('%', "0x02070022", "KC_PERC", LH),
    info('^', "0x02070023", "KC_CIRC", RH),
    info('+', "0x0207002e", "KC_PLUS", RH),
    info('~', "0x02070035", "KC_TILD", LH),
    info('!', "0x0207001e", "KC_EXLM", LH),
    info('@', "0x0207001f", "KC_AT", LH),
    info('#', "0x02070020", "KC_HASH", LH),
    info('|', "0x02070031", "KC_PIPE", RH),
    info('&', "0x02070024", "KC_AMPR", RH),
    info('_', "0x0207002d", "KC_UNDS", RH),
    info(';', "0x070033", "KC_SCLN", RH),
    info('`', "0x070035", "KC_GRV", LH),
    info('=', "0x07002e", "KC_EQL", RH),
    info('\\', "0x070031", "KC_BSLS", RH),
    info('-', "0x07002d", "KC_MINS", RH),
];

/// One of the 62 fixed antecedent characters.
///
/// The declaration order is the stable type id used as the document key and
/// as the traversal order of verification and macro planning.
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AntecedentType {
    A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    N0, N1, N2, N3, N4, N5, N6, N7, N8, N9,
    Comma, Dot, Quote, Slash,
    LBrace, RBrace, LParen, RParen, Star,
    Colon, Dollar, Percent, Caret, Plus,
    Tilde, Exclamation, At, Hash, Pipe,
    Ampersand, Underscore,
    Semicolon, Grave, Equal, Backslash, Minus,
}

impl AntecedentType {
    pub const COUNT: usize = 62;

    #[rustfmt::skip]
    pub const ALL: [Self; Self::COUNT] = {
        use AntecedentType::*;
        [
            A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
            N0, N1, N2, N3, N4, N5, N6, N7, N8, N9,
            Comma, Dot, Quote, Slash,
            LBrace, RBrace, LParen, RParen, Star,
            Colon, Dollar, Percent, Caret, Plus,
            Tilde, Exclamation, At, Hash, Pipe,
            Ampersand, Underscore,
            Semicolon, Grave, Equal, Backslash, Minus,
        ]
    };

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: i64) -> Option<Self> {
        usize::try_from(id).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Find the antecedent whose symbol matches `c` (letters case-insensitively).
    pub fn from_symbol(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        Self::ALL.into_iter().find(|a| a.symbol() == c)
    }

    pub fn info(self) -> &'static AntecedentInfo {
        &ANTECEDENT_TABLE[self as usize]
    }

    pub fn symbol(self) -> char {
        self.info().symbol
    }

    pub fn zmk_code(self) -> &'static str {
        self.info().zmk_code
    }

    pub fn qmk_code(self) -> &'static str {
        self.info().qmk_code
    }

    pub fn hand(self) -> Hand {
        self.info().hand
    }

    /// `true` if `c` is this antecedent's symbol, ignoring case.
    pub fn matches(self, c: char) -> bool {
        let symbol = self.symbol();
        c == symbol || c.to_lowercase().eq(symbol.to_lowercase())
    }
}

impl fmt::Display for AntecedentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

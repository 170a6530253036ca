//! Regex escaping for criteria values.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that carry meaning in the criteria matcher's regex syntax.
pub const SPECIAL_CHARS: &str = r".\+*?[^]$(){}=!<>|:-";

static SPECIAL_CHAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([.\\+*?\[^\]$(){}=!<>|:\-])").expect("special character class is a valid regex")
});

/// Prefix every special character in `value` with one backslash.
///
/// Apply this to single values, never to an assembled criteria line: the
/// `^`, `$`, `=` and `,` of the line itself must stay unescaped.
///
/// ```
/// use loc_criteria::regex_escape;
///
/// assert_eq!(regex_escape("A+B"), r"A\+B");
/// assert_eq!(regex_escape("menu"), "menu");
/// ```
pub fn regex_escape(value: &str) -> String {
    SPECIAL_CHAR_RE.replace_all(value, r"\$1").into_owned()
}

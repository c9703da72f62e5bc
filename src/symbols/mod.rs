//! Symbol tables for math and text mode
//!
//! Maps a token (`\alpha`, `+`, `x`) to the leaf node it produces: the atom
//! family or ordinary kind, the font, and the Unicode character it stands
//! for. Named symbols live in static `phf` tables; letters and digits are
//! inserted by [`create_symbols`], and callers may add their own with
//! [`Symbols::define_symbol`].
//!
//! ```
//! use katex_parser::symbols::{Atom, Group, Mode, create_symbols};
//!
//! let symbols = create_symbols();
//! let plus = symbols.get(Mode::Math, "+").unwrap();
//! assert_eq!(plus.group, Group::Atom(Atom::Bin));
//! assert!(symbols.get(Mode::Text, "\\alpha").is_none());
//! ```

mod data;
mod types;

use crate::namespace::KeyMap;
pub use data::{MATH_SYMBOLS, TEXT_SYMBOLS};
pub use types::{Atom, CharInfo, Font, Group, Mode, NonAtom};

/// Per-mode symbol lookup.
#[derive(Debug, Default)]
pub struct Symbols {
    math: KeyMap<String, CharInfo>,
    text: KeyMap<String, CharInfo>,
    builtins: bool,
}

impl Symbols {
    /// An empty table that does not consult the static tables either.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` to the table for `mode`. With `accept_unicode_char`, the
    /// replacement character is registered as a second name.
    pub fn define_symbol(
        &mut self,
        mode: Mode,
        font: Font,
        group: Group,
        replace: Option<char>,
        name: &str,
        accept_unicode_char: bool,
    ) {
        let info = CharInfo::new(font, group, replace);
        let table = match mode {
            Mode::Math => &mut self.math,
            Mode::Text => &mut self.text,
        };
        table.insert(name.to_owned(), info);
        if accept_unicode_char && let Some(ch) = replace {
            table.insert(ch.to_string(), info);
        }
    }

    /// Looks `name` up in math mode.
    #[must_use]
    pub fn get_math(&self, name: &str) -> Option<&CharInfo> {
        self.math
            .get(name)
            .or_else(|| self.builtins.then(|| MATH_SYMBOLS.get(name)).flatten())
    }

    /// Looks `name` up in text mode.
    #[must_use]
    pub fn get_text(&self, name: &str) -> Option<&CharInfo> {
        self.text
            .get(name)
            .or_else(|| self.builtins.then(|| TEXT_SYMBOLS.get(name)).flatten())
    }

    /// Looks `name` up in the table for `mode`.
    #[must_use]
    pub fn get(&self, mode: Mode, name: &str) -> Option<&CharInfo> {
        match mode {
            Mode::Math => self.get_math(name),
            Mode::Text => self.get_text(name),
        }
    }

    /// Whether `name` is a symbol in `mode`.
    #[must_use]
    pub fn contains(&self, mode: Mode, name: &str) -> bool {
        self.get(mode, name).is_some()
    }
}

/// Builds the standard table: the static named symbols plus letters, digits
/// and the ASCII punctuation that is ordinary in each mode.
#[must_use]
pub fn create_symbols() -> Symbols {
    let mut symbols = Symbols {
        builtins: true,
        ..Symbols::default()
    };
    let textord = Group::NonAtom(NonAtom::TextOrd);

    for ch in "0123456789/@.\"".chars() {
        symbols.define_symbol(Mode::Math, Font::Main, textord, Some(ch), &ch.to_string(), false);
    }
    for ch in "0123456789`!@*()-=+[]'\";:?/.,".chars() {
        symbols.define_symbol(Mode::Text, Font::Main, textord, Some(ch), &ch.to_string(), false);
    }
    for ch in ('a'..='z').chain('A'..='Z') {
        let name = ch.to_string();
        symbols.define_symbol(
            Mode::Math,
            Font::Main,
            Group::NonAtom(NonAtom::MathOrd),
            Some(ch),
            &name,
            false,
        );
        symbols.define_symbol(Mode::Text, Font::Main, textord, Some(ch), &name, false);
    }
    symbols
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_depend_on_mode() {
        let symbols = create_symbols();
        assert_eq!(
            symbols.get(Mode::Math, "x").unwrap().group,
            Group::NonAtom(NonAtom::MathOrd)
        );
        assert_eq!(
            symbols.get(Mode::Text, "x").unwrap().group,
            Group::NonAtom(NonAtom::TextOrd)
        );
    }

    #[test]
    fn test_named_symbols() {
        let symbols = create_symbols();
        let sigma = symbols.get_math("\\sigma").unwrap();
        assert_eq!(sigma.replace, Some('\u{3c3}'));
        assert_eq!(
            symbols.get_math("\\leq").map(|info| info.group),
            Some(Group::Atom(Atom::Rel))
        );
        assert!(symbols.contains(Mode::Math, "\\;"));
        assert!(symbols.contains(Mode::Text, " "));
        assert!(!symbols.contains(Mode::Math, " "));
    }

    #[test]
    fn test_empty_table_has_no_builtins() {
        let mut symbols = Symbols::new();
        assert!(!symbols.contains(Mode::Math, "+"));

        symbols.define_symbol(
            Mode::Math,
            Font::Ams,
            Group::Atom(Atom::Rel),
            Some('\u{2a7d}'),
            "\\leqslant",
            true,
        );
        assert!(symbols.contains(Mode::Math, "\\leqslant"));
        assert!(symbols.contains(Mode::Math, "\u{2a7d}"));
        assert!(!symbols.contains(Mode::Text, "\\leqslant"));
    }
}

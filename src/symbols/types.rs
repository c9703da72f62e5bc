use strum::{AsRefStr, Display, EnumString};

/// Whether tokens are read as math or as text.
///
/// Math mode skips whitespace and looks symbols up in the math table. Text
/// mode keeps spaces as spacing nodes and forms ligatures such as `--`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// `$a + b = c$`
    Math,
    /// `\text{x}`
    Text,
}

/// Font family a symbol comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Font {
    /// The standard TeX fonts.
    Main,
    /// The AMS symbol fonts.
    Ams,
}

/// TeX atom families that symbols can belong to. Each one decides the spacing
/// a renderer puts around the symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Atom {
    /// Binary operators such as `+` and `\times`.
    Bin,
    /// Closing delimiters.
    Close,
    /// Fractions and similar inner constructs.
    Inner,
    /// Opening delimiters.
    Open,
    /// Punctuation such as `,`.
    Punct,
    /// Relations such as `=` and `\leq`.
    Rel,
}

/// Node kinds for symbols that are not atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonAtom {
    AccentToken,
    MathOrd,
    OpToken,
    Spacing,
    TextOrd,
}

/// The node kind a symbol produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// An `atom` node with this family.
    Atom(Atom),
    /// Any other leaf kind.
    NonAtom(NonAtom),
}

/// Everything the symbol table knows about one name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharInfo {
    /// Font family.
    pub font: Font,
    /// Node kind.
    pub group: Group,
    /// The Unicode character the name stands for, if it has one.
    pub replace: Option<char>,
}

impl CharInfo {
    /// Builds an entry; `const` so tables can be `static`.
    #[must_use]
    pub const fn new(font: Font, group: Group, replace: Option<char>) -> Self {
        Self {
            font,
            group,
            replace,
        }
    }
}

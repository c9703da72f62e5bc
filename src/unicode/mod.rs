//! Writing systems accepted as plain text characters
//!
//! A non-ASCII character that is not in the symbol table is still accepted
//! when it belongs to one of these scripts. In math mode the parser reports
//! it through the strict policy as `unicodeTextInMathMode`.

use strum::{AsRefStr, Display};

/// A script with its codepoint blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Script {
    Latin,
    Cyrillic,
    Armenian,
    Brahmic,
    Georgian,
    Cjk,
    Hangul,
}

impl Script {
    /// Every supported script.
    pub const ALL: [Self; 7] = [
        Self::Latin,
        Self::Cyrillic,
        Self::Armenian,
        Self::Brahmic,
        Self::Georgian,
        Self::Cjk,
        Self::Hangul,
    ];

    /// Inclusive codepoint ranges belonging to the script.
    #[must_use]
    pub const fn blocks(self) -> &'static [(u32, u32)] {
        match self {
            // Latin-1 letters, Latin Extended-A and -B, combining diacritics
            Self::Latin => &[(0x00C0, 0x024F), (0x0300, 0x036F)],
            Self::Cyrillic => &[(0x0400, 0x04FF)],
            Self::Armenian => &[(0x0530, 0x058F)],
            // Devanagari through Myanmar
            Self::Brahmic => &[(0x0900, 0x109F)],
            Self::Georgian => &[(0x10A0, 0x10FF)],
            // CJK punctuation, kana, ideograms and fullwidth forms
            Self::Cjk => &[(0x3000, 0x30FF), (0x4E00, 0x9FAF), (0xFF00, 0xFF60)],
            Self::Hangul => &[(0xAC00, 0xD7AF)],
        }
    }

    /// The script `ch` belongs to, if any.
    #[must_use]
    pub fn of(ch: char) -> Option<Self> {
        let cp = u32::from(ch);
        Self::ALL.into_iter().find(|script| {
            script
                .blocks()
                .iter()
                .any(|&(lo, hi)| (lo..=hi).contains(&cp))
        })
    }
}

/// Whether `ch` belongs to a supported script.
#[must_use]
pub fn supported_codepoint(ch: char) -> bool {
    Script::of(ch).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_boundaries() {
        assert_eq!(Script::of('\u{00E9}'), Some(Script::Latin));
        assert_eq!(Script::of('\u{024F}'), Some(Script::Latin));
        assert_eq!(Script::of('\u{0416}'), Some(Script::Cyrillic));
        assert_eq!(Script::of('\u{0531}'), Some(Script::Armenian));
        assert_eq!(Script::of('\u{0905}'), Some(Script::Brahmic));
        assert_eq!(Script::of('\u{10D0}'), Some(Script::Georgian));
        assert_eq!(Script::of('\u{4E2D}'), Some(Script::Cjk));
        assert_eq!(Script::of('\u{FF60}'), Some(Script::Cjk));
        assert_eq!(Script::of('\u{D55C}'), Some(Script::Hangul));
    }

    #[test]
    fn test_unsupported_characters() {
        assert!(!supported_codepoint('a'));
        assert!(!supported_codepoint('\u{00BF}'));
        assert!(!supported_codepoint('\u{2603}'));
        assert!(!supported_codepoint('\u{1F600}'));
        assert_eq!(Script::Cjk.as_ref(), "cjk");
    }
}

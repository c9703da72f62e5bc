//! Macros every parse starts with
//!
//! String bodies are lexed on each expansion. The procedural entries are the
//! TeX primitives that need to look at or rearrange the token stream.

use phf::phf_map;

use crate::macros::{MacroDefinition, MacroExpansionResult};
use crate::types::Mode;

/// The builtin macro table, the bottom layer of every macro namespace.
pub static BUILTIN_MACROS: phf::Map<&'static str, MacroDefinition> = phf_map! {
    // The expansion is the token itself, but a control sequence that would
    // normally expand is read as if it were `\relax`.
    "\\noexpand" => MacroDefinition::StaticFunction(|context| {
        let mut token = context.pop_token()?;
        if context.is_expandable(token.text()) {
            token.noexpand = true;
            token.treat_as_relax = true;
        }
        Ok(MacroExpansionResult::from_tokens(vec![token]))
    }),
    // Read t without expanding it, expand the token after it once, then put
    // t back in front.
    "\\expandafter" => MacroDefinition::StaticFunction(|context| {
        let token = context.pop_token()?;
        context.expand_once(true)?;
        Ok(MacroExpansionResult::from_tokens(vec![token]))
    }),
    // \long\def\@firstoftwo#1#2{#1}
    "\\@firstoftwo" => MacroDefinition::StaticFunction(|context| {
        let mut args = context.consume_args(2)?;
        args.truncate(1);
        Ok(MacroExpansionResult::from_tokens(args.pop().unwrap_or_default()))
    }),
    // \long\def\@secondoftwo#1#2{#2}
    "\\@secondoftwo" => MacroDefinition::StaticFunction(|context| {
        let mut args = context.consume_args(2)?;
        Ok(MacroExpansionResult::from_tokens(args.pop().unwrap_or_default()))
    }),
    // \@ifnextchar#1#2#3 skips spaces and compares the next unexpanded token
    // with #1, without consuming it.
    "\\@ifnextchar" => MacroDefinition::StaticFunction(|context| {
        let mut args = context.consume_args(3)?;
        context.consume_spaces()?;
        let next = context.future()?.text();
        let matched = matches!(args[0].as_slice(), [only] if only.text() == next);
        let otherwise = args.pop().unwrap_or_default();
        let then = args.pop().unwrap_or_default();
        Ok(MacroExpansionResult::from_tokens(if matched { then } else { otherwise }))
    }),
    "\\@ifstar" => MacroDefinition::StaticStr("\\@ifnextchar *{\\@firstoftwo{#1}}"),
    "\\TextOrMath" => MacroDefinition::StaticFunction(|context| {
        let mut args = context.consume_args(2)?;
        let math = args.pop().unwrap_or_default();
        let text = args.pop().unwrap_or_default();
        Ok(MacroExpansionResult::from_tokens(if context.mode() == Mode::Text {
            text
        } else {
            math
        }))
    }),

    // Grouping
    "\\bgroup" => MacroDefinition::StaticStr("{"),
    "\\egroup" => MacroDefinition::StaticStr("}"),
    "\\begingroup" => MacroDefinition::StaticStr("{"),
    "\\endgroup" => MacroDefinition::StaticStr("}"),

    // Spacing
    "\\mkern" => MacroDefinition::StaticStr("\\kern"),
    "~" => MacroDefinition::StaticStr("\\nobreakspace"),

    // amsmath
    "\\overset" => MacroDefinition::StaticStr("\\mathop{#2}\\limits^{#1}"),
    "\\underset" => MacroDefinition::StaticStr("\\mathop{#2}\\limits_{#1}"),
    "\\boxed" => MacroDefinition::StaticStr("\\fbox{\\displaystyle{#1}}"),
    "\\iff" => MacroDefinition::StaticStr("\\;\\Longleftrightarrow\\;"),
    "\\implies" => MacroDefinition::StaticStr("\\;\\Longrightarrow\\;"),
    "\\impliedby" => MacroDefinition::StaticStr("\\;\\Longleftarrow\\;"),

    // Negations
    "\\neq" => MacroDefinition::StaticStr("\\mathrel{\\not=}"),
    "\\ne" => MacroDefinition::StaticStr("\\neq"),
    "\u{2260}" => MacroDefinition::StaticStr("\\neq"),
    "\\notin" => MacroDefinition::StaticStr("\\mathrel{\\not\\in}"),
    "\u{2209}" => MacroDefinition::StaticStr("\\notin"),

    // mathtools.sty
    "\\ordinarycolon" => MacroDefinition::StaticStr(":"),
    "\\vcentcolon" => MacroDefinition::StaticStr("\\mathrel{\\mathop\\ordinarycolon}"),
    "\\dblcolon" => MacroDefinition::StaticStr("\\vcentcolon\\mathrel{\\mkern-.9mu}\\vcentcolon"),
    "\\coloneqq" => MacroDefinition::StaticStr("\\vcentcolon\\mathrel{\\mkern-1.2mu}="),
    "\\Coloneqq" => MacroDefinition::StaticStr("\\dblcolon\\mathrel{\\mkern-1.2mu}="),
    "\\coloneq" => MacroDefinition::StaticStr("\\vcentcolon\\mathrel{\\mkern-1.2mu}\\mathrel{-}"),
    "\\Coloneq" => MacroDefinition::StaticStr("\\dblcolon\\mathrel{\\mkern-1.2mu}\\mathrel{-}"),
    "\\eqqcolon" => MacroDefinition::StaticStr("=\\mathrel{\\mkern-1.2mu}\\vcentcolon"),
    "\\Eqqcolon" => MacroDefinition::StaticStr("=\\mathrel{\\mkern-1.2mu}\\dblcolon"),
    "\\eqcolon" => MacroDefinition::StaticStr("\\mathrel{-}\\mathrel{\\mkern-1.2mu}\\vcentcolon"),
    "\\Eqcolon" => MacroDefinition::StaticStr("\\mathrel{-}\\mathrel{\\mkern-1.2mu}\\dblcolon"),
    "\\colonapprox" => MacroDefinition::StaticStr("\\vcentcolon\\mathrel{\\mkern-1.2mu}\\approx"),
    "\\Colonapprox" => MacroDefinition::StaticStr("\\dblcolon\\mathrel{\\mkern-1.2mu}\\approx"),
    "\\colonsim" => MacroDefinition::StaticStr("\\vcentcolon\\mathrel{\\mkern-1.2mu}\\sim"),
    "\\Colonsim" => MacroDefinition::StaticStr("\\dblcolon\\mathrel{\\mkern-1.2mu}\\sim"),
    "\u{2254}" => MacroDefinition::StaticStr("\\coloneqq"),
    "\u{2255}" => MacroDefinition::StaticStr("\\eqqcolon"),
    "\u{2237}" => MacroDefinition::StaticStr("\\dblcolon"),

    // colonequals.sty
    "\\ratio" => MacroDefinition::StaticStr("\\vcentcolon"),
    "\\coloncolon" => MacroDefinition::StaticStr("\\dblcolon"),
    "\\colonequals" => MacroDefinition::StaticStr("\\coloneqq"),
    "\\coloncolonequals" => MacroDefinition::StaticStr("\\Coloneqq"),
    "\\equalscolon" => MacroDefinition::StaticStr("\\eqqcolon"),
    "\\equalscoloncolon" => MacroDefinition::StaticStr("\\Eqqcolon"),
    "\\colonminus" => MacroDefinition::StaticStr("\\coloneq"),
    "\\coloncolonminus" => MacroDefinition::StaticStr("\\Coloneq"),
    "\\minuscolon" => MacroDefinition::StaticStr("\\eqcolon"),
    "\\minuscoloncolon" => MacroDefinition::StaticStr("\\Eqcolon"),
    "\\coloncolonapprox" => MacroDefinition::StaticStr("\\Colonapprox"),
    "\\coloncolonsim" => MacroDefinition::StaticStr("\\Colonsim"),
    "\\simcolon" => MacroDefinition::StaticStr("\\sim\\mathrel{\\mkern-1.2mu}\\vcentcolon"),
    "\\simcoloncolon" => MacroDefinition::StaticStr("\\sim\\mathrel{\\mkern-1.2mu}\\dblcolon"),
    "\\approxcolon" => MacroDefinition::StaticStr("\\approx\\mathrel{\\mkern-1.2mu}\\vcentcolon"),
    "\\approxcoloncolon" => MacroDefinition::StaticStr("\\approx\\mathrel{\\mkern-1.2mu}\\dblcolon"),
};

//! Macro definitions: `\def`, `\gdef`, `\global`, `\let` and `\newcommand`
//!
//! These read their operands straight from the gullet, unexpanded, and leave
//! an `internal` node behind.

use phf::phf_map;

use crate::KatexContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec};
use crate::macros::{MacroContextInterface as _, MacroDefinition, MacroExpansion};
use crate::parser::GroupRole;
use crate::parser::parse_node::{ParseNode, ParseNodeInternal};
use crate::types::{ParseError, ParseErrorKind, Token};

/// What `\global` turns the following command into.
static GLOBAL_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "\\def" => "\\gdef",
    "\\gdef" => "\\gdef",
    "\\let" => "\\\\globallet",
};

/// Registers the definition commands.
pub fn define_def(ctx: &mut KatexContext) {
    let props = FunctionPropSpec {
        allowed_in_text: true,
        primitive: true,
        ..Default::default()
    };

    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Global,
        names: &["\\global"],
        props: props.clone(),
    });
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Def,
        names: &["\\def", "\\gdef"],
        props: props.clone(),
    });
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Let,
        names: &["\\let", "\\\\globallet"],
        props: props.clone(),
    });
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::NewCommand,
        names: &["\\newcommand", "\\renewcommand", "\\providecommand"],
        props,
    });
}

fn internal(context: &FunctionContext<'_, '_>) -> ParseNode {
    ParseNode::Internal(ParseNodeInternal {
        mode: context.parser.mode,
        loc: context.loc(),
    })
}

/// Pops the name being defined, which must be a control sequence or an
/// active character.
fn pop_macro_name(context: &mut FunctionContext<'_, '_>) -> Result<Token, ParseError> {
    let name = context.parser.gullet.pop_token()?;
    if matches!(
        name.text(),
        "\\" | "{" | "}" | "$" | "&" | "#" | "^" | "_" | "EOF"
    ) {
        return Err(ParseError::with_token(
            ParseErrorKind::ExpectedControlSequence,
            &name,
        ));
    }
    Ok(name)
}

/// `\def\name#1#2{body}`. Parameters must be numbered in order from 1.
pub(super) fn def(mut context: FunctionContext<'_, '_>) -> Result<ParseNode, ParseError> {
    let name = pop_macro_name(&mut context)?;

    let mut num_args = 0;
    while context.parser.gullet.future()?.text == "#" {
        context.parser.gullet.pop_token()?;
        let number = context.parser.gullet.pop_token()?;
        let valid = match number.text().as_bytes() {
            [digit @ b'1'..=b'9'] => usize::from(digit - b'0') == num_args + 1,
            _ => false,
        };
        if !valid {
            return Err(ParseError::with_token(
                ParseErrorKind::InvalidMacroArgumentNumber {
                    value: number.text().to_owned(),
                },
                &number,
            ));
        }
        num_args += 1;
    }

    let mut tokens = context.parser.gullet.consume_arg()?.tokens;
    tokens.reverse();

    let global = context.func_name == "\\gdef";
    context.parser.gullet.macros_mut().set(
        name.text(),
        Some(MacroDefinition::Expansion(MacroExpansion {
            tokens,
            num_args,
            unexpandable: false,
        })),
        global,
    );

    Ok(internal(&context))
}

/// `\global` rewrites the next command into its global form and parses it.
pub(super) fn global(context: FunctionContext<'_, '_>) -> Result<ParseNode, ParseError> {
    context.parser.consume_spaces()?;
    let next = context.parser.fetch()?;
    let Some(&replacement) = GLOBAL_MAP.get(next.text()) else {
        return Err(ParseError::with_token(
            ParseErrorKind::InvalidGlobalPrefix {
                token: next.text().to_owned(),
            },
            next,
        ));
    };
    let token = Token::new(replacement, next.loc.clone());
    context.parser.consume();
    context.parser.gullet.push_token(token);

    context
        .parser
        .parse_function(context.break_on_token_text, GroupRole::Atom)?
        .ok_or_else(|| {
            ParseError::new(ParseErrorKind::InvalidGlobalPrefix {
                token: replacement.to_owned(),
            })
        })
}

/// `\let\a=\b`, with an optional `=` and one optional space after it.
///
/// `\a` gets a copy of `\b`'s current definition. When `\b` is not a macro,
/// `\a` expands to a protected `\b` token.
pub(super) fn let_(mut context: FunctionContext<'_, '_>) -> Result<ParseNode, ParseError> {
    let name = pop_macro_name(&mut context)?;
    let gullet = &mut context.parser.gullet;

    gullet.consume_spaces()?;
    let mut target = gullet.pop_token()?;
    if target.text == "=" {
        target = gullet.pop_token()?;
        if target.text == " " {
            target = gullet.pop_token()?;
        }
    }

    let definition = match gullet.macros().get(target.text()) {
        Some(existing) => existing.clone(),
        None => {
            let unexpandable = !gullet.is_expandable(target.text());
            let mut token = target;
            token.noexpand = true;
            MacroDefinition::Expansion(MacroExpansion {
                tokens: vec![token],
                num_args: 0,
                unexpandable,
            })
        }
    };

    let global = context.func_name == "\\\\globallet";
    context
        .parser
        .gullet
        .macros_mut()
        .set(name.text(), Some(definition), global);

    Ok(internal(&context))
}

/// `\newcommand{\name}[n]{body}` and its variants. `\newcommand` refuses to
/// redefine, `\renewcommand` refuses to define, `\providecommand` does
/// either.
pub(super) fn new_command(context: FunctionContext<'_, '_>) -> Result<ParseNode, ParseError> {
    let exists_ok = context.func_name != "\\newcommand";
    let nonexists_ok = context.func_name != "\\renewcommand";

    let name_arg = context.parser.gullet.consume_arg()?;
    let [name] = <[Token; 1]>::try_from(name_arg.tokens)
        .map_err(|_| ParseError::with_token(ParseErrorKind::ExpectedControlSequence, &name_arg.start))?;

    let exists = context.parser.gullet.is_defined(name.text());
    if exists && !exists_ok {
        return Err(ParseError::with_token(
            ParseErrorKind::MacroAlreadyDefined {
                name: name.text().to_owned(),
            },
            &name,
        ));
    }
    if !exists && !nonexists_ok {
        return Err(ParseError::with_token(
            ParseErrorKind::MacroNotDefined {
                name: name.text().to_owned(),
            },
            &name,
        ));
    }

    let mut num_args = 0;
    let mut body = context.parser.gullet.consume_arg()?;
    if body.tokens.len() == 1 && body.tokens[0].text == "[" {
        let mut count = String::new();
        loop {
            let token = context.parser.fetch()?;
            if token.text == "]" || token.is_eof() {
                break;
            }
            count.push_str(token.text());
            context.parser.consume();
        }
        context.parser.consume();
        num_args = count
            .trim()
            .parse()
            .map_err(|_| ParseError::new(ParseErrorKind::InvalidArgumentCount { value: count }))?;
        body = context.parser.gullet.consume_arg()?;
    }

    let mut tokens = body.tokens;
    tokens.reverse();
    context.parser.gullet.macros_mut().set(
        name.text(),
        Some(MacroDefinition::Expansion(MacroExpansion {
            tokens,
            num_args,
            unexpandable: false,
        })),
        false,
    );

    Ok(internal(&context))
}

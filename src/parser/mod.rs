//! Recursive-descent parser from tokens to [`ParseNode`] trees

use core::iter;

use phf::phf_set;

use crate::define_function::FunctionContext;
use crate::functions;
use crate::macro_expander::{IMPLICIT_COMMANDS, MacroExpander};
use crate::macros::MacroContextInterface as _;
use crate::symbols::{Group, NonAtom};
use crate::types::{
    ArgType, BreakToken, ErrorLocationProvider, Mode, ParseError, ParseErrorKind, Settings,
    SourceLocation, Spec, StrictWarning, StyleVariant, Token,
};
use crate::unicode::supported_codepoint;
use crate::units::{parse_measurement, valid_unit};
use crate::KatexContext;

pub mod parse_node;

pub use parse_node::ParseNodeError;
use parse_node::{
    ParseNode, ParseNodeAccentToken, ParseNodeAtom, ParseNodeColorToken, ParseNodeErrorLeaf,
    ParseNodeMathOrd, ParseNodeOpToken, ParseNodeOrdGroup, ParseNodeRaw, ParseNodeSize,
    ParseNodeSpacing, ParseNodeStyling, ParseNodeSupSub, ParseNodeTextOrd,
};

/// Greediness of `^` and `_`: a function may be an unbraced script only when
/// its own greediness is higher.
const SUPSUB_GREEDINESS: u8 = 1;

/// Tokens that end any expression, whatever the caller's break token.
static END_OF_EXPRESSION: phf::Set<&'static str> = phf_set! {
    "}",
    "\\endgroup",
    "\\end",
    "\\right",
    "&",
    "\\\\",
    "\\cr",
    "EOF",
};

/// Where a group is being parsed, which decides whether a function
/// application may stand there without braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRole<'n> {
    /// The nucleus of an atom. Anything goes.
    Atom,
    /// The script after `^` or `_`.
    Script {
        /// `superscript` or `subscript`, for error messages.
        name: &'n str,
        /// The `^` or `_` token, where script errors are reported.
        symbol: &'n Token,
    },
    /// An argument of `parent`, whose greediness an unbraced function
    /// argument must exceed.
    Argument {
        /// The function whose argument this is.
        parent: &'n str,
        /// The parent's greediness.
        greediness: u8,
    },
}

/// Parses one input string into a list of nodes.
///
/// The parser reads only through the gullet, one lookahead token at a time.
/// It keeps the `mode` (math or text), which decides what symbols mean, which
/// functions are allowed and whether spaces matter.
///
/// ```
/// use katex_parser::parser::Parser;
/// use katex_parser::{KatexContext, Settings};
///
/// let ctx = KatexContext::default();
/// let settings = Settings::default();
/// let mut parser = Parser::new(r"x^2 + \frac{1}{2}", &settings, &ctx);
/// let nodes = parser.parse().unwrap();
/// assert_eq!(nodes.len(), 3);
/// ```
pub struct Parser<'a> {
    /// Current mode.
    pub mode: Mode,
    /// Token source and macro expander.
    pub gullet: MacroExpander<'a>,
    /// Options for this parse.
    pub settings: &'a Settings,
    /// Number of enclosing `\left`, for `\middle` checks.
    pub leftright_depth: usize,
    /// Lookahead token, filled by [`Parser::fetch`].
    pub next_token: Option<Token>,
    /// Registries of functions, environments and symbols.
    pub ctx: &'a KatexContext,
    /// Strict-mode warnings raised by the parser itself.
    pub warnings: Vec<StrictWarning>,
}

/// Wraps nodes in an ordgroup, unless they already are exactly one.
fn wrap_ordgroup(mut nodes: Vec<ParseNode>, mode: Mode) -> ParseNode {
    if let [ParseNode::OrdGroup(_)] = nodes.as_slice() {
        return nodes.remove(0);
    }
    ParseNode::ord_group(mode, nodes)
}

/// Whether `text` can still grow into a size such as `-1.5 em`: an optional
/// sign, a number, spaces and at most two unit letters. Also true for the
/// empty and sign-only prefixes.
fn is_size_prefix(text: &str) -> bool {
    let text = text.strip_prefix(['+', '-']).unwrap_or(text);
    let text = text.trim_start_matches(' ');

    let after_int = text.trim_start_matches(|c: char| c.is_ascii_digit());
    let has_int = after_int.len() < text.len();
    let (has_dot, rest) = match after_int.strip_prefix('.') {
        Some(frac) => (true, frac.trim_start_matches(|c: char| c.is_ascii_digit())),
        None => (false, after_int),
    };
    if !has_int && !has_dot {
        return rest.is_empty();
    }

    let rest = rest.trim_start_matches(' ');
    let unit = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_lowercase()).len();
    unit <= 2 && rest[unit..].trim_start_matches(' ').is_empty()
}

/// Whether `text` is a color the renderer understands: `#rgb`, `#rrggbb`,
/// `rrggbb` or a name made of letters.
fn is_color(text: &str) -> bool {
    let hex = |digits: &str| digits.chars().all(|c| c.is_ascii_hexdigit());
    match text.strip_prefix('#') {
        Some(digits) => matches!(digits.len(), 3 | 6) && hex(digits),
        None => (text.len() == 6 && hex(text)) || (!text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic())),
    }
}

/// Merges runs of text-mode characters into the ligatures TeX fonts
/// provide: `--`, `---`, ` `` ` and `''`.
fn form_ligatures(group: &mut Vec<ParseNode>) {
    let mut i = 0;
    while i + 1 < group.len() {
        let third = group.get(i + 2).and_then(ParseNode::text);
        let (text, width) = match (group[i].text(), group[i + 1].text(), third) {
            (Some("-"), Some("-"), Some("-")) => ("---", 3),
            (Some("-"), Some("-"), _) => ("--", 2),
            (Some("`"), Some("`"), _) => ("``", 2),
            (Some("'"), Some("'"), _) => ("''", 2),
            _ => {
                i += 1;
                continue;
            }
        };
        let loc = SourceLocation::range(
            group[i].location().cloned(),
            group[i + width - 1].location().cloned(),
        );
        group.splice(
            i..i + width,
            iter::once(ParseNode::TextOrd(ParseNodeTextOrd {
                mode: Mode::Text,
                loc,
                text: text.to_owned(),
            })),
        );
        i += 1;
    }
}

/// The leaf node for a symbol table entry.
fn symbol_node(group: Group, mode: Mode, loc: Option<SourceLocation>, text: String) -> ParseNode {
    match group {
        Group::Atom(family) => ParseNode::Atom(ParseNodeAtom {
            mode,
            loc,
            family,
            text,
        }),
        Group::NonAtom(NonAtom::MathOrd) => ParseNode::MathOrd(ParseNodeMathOrd { mode, loc, text }),
        Group::NonAtom(NonAtom::TextOrd) => ParseNode::TextOrd(ParseNodeTextOrd { mode, loc, text }),
        Group::NonAtom(NonAtom::Spacing) => ParseNode::Spacing(ParseNodeSpacing { mode, loc, text }),
        Group::NonAtom(NonAtom::AccentToken) => {
            ParseNode::AccentToken(ParseNodeAccentToken { mode, loc, text })
        }
        Group::NonAtom(NonAtom::OpToken) => ParseNode::OpToken(ParseNodeOpToken { mode, loc, text }),
    }
}

impl<'a> Parser<'a> {
    /// Creates a parser over `input`, starting in math mode.
    #[must_use]
    pub fn new(input: &str, settings: &'a Settings, ctx: &'a KatexContext) -> Self {
        let mode = Mode::Math;
        Self {
            mode,
            gullet: MacroExpander::new(input, settings, mode, ctx),
            settings,
            leftright_depth: 0,
            next_token: None,
            ctx,
            warnings: Vec::new(),
        }
    }

    /// Fails unless the lookahead token is `text`, optionally consuming it.
    pub fn expect(&mut self, text: &str, consume: bool) -> Result<(), ParseError> {
        let token = self.fetch()?;
        if token.text != text {
            return Err(ParseError::with_token(
                ParseErrorKind::ExpectedToken {
                    expected: text.to_owned(),
                    found: token.text().to_owned(),
                },
                token,
            ));
        }
        if consume {
            self.consume();
        }
        Ok(())
    }

    /// Drops the lookahead token.
    pub fn consume(&mut self) {
        self.next_token = None;
    }

    /// The lookahead token, expanding the next one from the gullet if none
    /// is buffered.
    pub fn fetch(&mut self) -> Result<&Token, ParseError> {
        match &mut self.next_token {
            Some(token) => Ok(token),
            next_token => {
                let token = self.gullet.expand_next_token()?;
                Ok(next_token.get_or_insert(token))
            }
        }
    }

    /// Switches the parser and gullet to `new_mode`.
    pub const fn switch_mode(&mut self, new_mode: Mode) {
        self.mode = new_mode;
        self.gullet.switch_mode(new_mode);
    }

    /// Applies the strict policy, keeping any warning for the caller.
    pub fn report_nonstrict(
        &mut self,
        code: &str,
        message: &str,
        token: Option<&dyn ErrorLocationProvider>,
    ) -> Result<(), ParseError> {
        if let Some(warning) = self.settings.report_nonstrict(code, message, token)? {
            self.warnings.push(warning);
        }
        Ok(())
    }

    /// Every strict-mode warning raised so far, by the lexer and the parser.
    pub fn take_warnings(&mut self) -> Vec<StrictWarning> {
        let mut warnings = self.gullet.take_warnings();
        warnings.append(&mut self.warnings);
        warnings
    }

    /// Parses the whole input.
    ///
    /// The expression runs in its own macro scope unless
    /// [`Settings::global_group`] is set, and every scope is closed again
    /// whether or not parsing succeeds.
    pub fn parse(&mut self) -> Result<Vec<ParseNode>, ParseError> {
        if !self.settings.global_group {
            self.gullet.begin_group();
        }
        let result = self.parse_input();
        self.gullet.end_groups();
        result
    }

    fn parse_input(&mut self) -> Result<Vec<ParseNode>, ParseError> {
        let body = self.parse_expression(false, None)?;

        let next = self.fetch()?.clone();
        match next.text() {
            "\\right" => Err(ParseError::with_token(ParseErrorKind::UnmatchedRight, &next)),
            "\\end" => {
                let name = match self.parse_function(None, GroupRole::Atom)? {
                    Some(ParseNode::Environment(end)) => end.name,
                    _ => String::new(),
                };
                Err(ParseError::with_token(ParseErrorKind::UnmatchedEnd { name }, &next))
            }
            _ => {
                self.expect("EOF", true)?;
                Ok(body)
            }
        }
    }

    /// Parses a list of atoms.
    ///
    /// Stops before an end-of-expression token, before
    /// `break_on_token_text`, and, with `break_on_infix`, before an infix
    /// function such as `\over`, which then belongs to the enclosing
    /// expression. The result has its ligatures formed (in text mode) and
    /// its infix operator, if any, rewritten.
    pub fn parse_expression(
        &mut self,
        break_on_infix: bool,
        break_on_token_text: Option<&BreakToken>,
    ) -> Result<Vec<ParseNode>, ParseError> {
        let ctx = self.ctx;
        let mut body = Vec::new();

        loop {
            if self.mode == Mode::Math {
                self.consume_spaces()?;
            }
            let lex = self.fetch()?;
            if END_OF_EXPRESSION.contains(lex.text()) {
                break;
            }
            if break_on_token_text.is_some_and(|token| lex.text == token.as_ref()) {
                break;
            }
            if break_on_infix && ctx.functions.get(lex.text()).is_some_and(|func| func.infix) {
                break;
            }

            let Some(atom) = self.parse_atom(break_on_token_text)? else {
                break;
            };
            if let ParseNode::Internal(_) = atom {
                continue;
            }
            body.push(atom);
        }

        if self.mode == Mode::Text {
            form_ligatures(&mut body);
        }
        self.handle_infix_nodes(body)
    }

    /// Skips space tokens.
    pub fn consume_spaces(&mut self) -> Result<(), ParseError> {
        while self.fetch()?.text == " " {
            self.consume();
        }
        Ok(())
    }

    /// Rewrites `a \over b` into `\frac{a}{b}`. There may be at most one
    /// infix operator per expression.
    fn handle_infix_nodes(&mut self, mut body: Vec<ParseNode>) -> Result<Vec<ParseNode>, ParseError> {
        let mut infix = None;
        for (index, node) in body.iter().enumerate() {
            if let ParseNode::Infix(node) = node {
                if infix.is_some() {
                    return Err(ParseError::with_token(
                        ParseErrorKind::MultipleInfixOperators,
                        &node.token,
                    ));
                }
                infix = Some((index, node.replace_with.clone()));
            }
        }
        let Some((index, replace_with)) = infix else {
            return Ok(body);
        };

        let denom = body.split_off(index + 1);
        body.pop();
        let numer = wrap_ordgroup(body, self.mode);
        let denom = wrap_ordgroup(denom, self.mode);

        let node = self.call_function(&replace_with, vec![numer, denom], Vec::new(), None, None)?;
        Ok(vec![node])
    }

    /// Parses a nucleus with its scripts and limit controls.
    fn parse_atom(
        &mut self,
        break_on_token_text: Option<&BreakToken>,
    ) -> Result<Option<ParseNode>, ParseError> {
        let mut base = self.parse_implicit_group(break_on_token_text)?;

        if self.mode == Mode::Text || matches!(base, Some(ParseNode::Internal(_))) {
            return Ok(base);
        }

        let mut sup = None;
        let mut sub = None;
        loop {
            self.consume_spaces()?;
            let lex = self.fetch()?.clone();
            match lex.text() {
                "\\limits" | "\\nolimits" => {
                    let Some(ParseNode::Op(op)) = &mut base else {
                        return Err(ParseError::with_token(
                            ParseErrorKind::LimitControlsMustFollowMathOperator,
                            &lex,
                        ));
                    };
                    op.limits = lex.text == "\\limits";
                    op.always_handle_sup_sub = true;
                    self.consume();
                }
                "^" => {
                    if sup.is_some() {
                        return Err(ParseError::with_token(ParseErrorKind::DoubleSuperscript, &lex));
                    }
                    sup = Some(self.handle_sup_subscript("superscript")?);
                }
                "_" => {
                    if sub.is_some() {
                        return Err(ParseError::with_token(ParseErrorKind::DoubleSubscript, &lex));
                    }
                    sub = Some(self.handle_sup_subscript("subscript")?);
                }
                "'" => {
                    if sup.is_some() {
                        return Err(ParseError::with_token(ParseErrorKind::DoubleSuperscript, &lex));
                    }
                    let mut count = 1;
                    self.consume();
                    while self.fetch()?.text == "'" {
                        count += 1;
                        self.consume();
                    }
                    let prime = ParseNode::TextOrd(ParseNodeTextOrd {
                        mode: self.mode,
                        loc: None,
                        text: "\\prime".to_owned(),
                    });
                    let mut primes: Vec<ParseNode> = iter::repeat_n(prime, count).collect();
                    if self.fetch()?.text == "^" {
                        primes.push(self.handle_sup_subscript("superscript")?);
                    }
                    sup = Some(ParseNode::ord_group(self.mode, primes));
                }
                _ => break,
            }
        }

        if sup.is_none() && sub.is_none() {
            return Ok(base);
        }
        Ok(Some(ParseNode::SupSub(ParseNodeSupSub {
            mode: self.mode,
            loc: None,
            base: base.map(Box::new),
            sup: sup.map(Box::new),
            sub: sub.map(Box::new),
        })))
    }

    /// Parses the script after `^` or `_`.
    fn handle_sup_subscript(&mut self, name: &str) -> Result<ParseNode, ParseError> {
        let symbol = self.fetch()?.clone();
        self.consume();
        self.consume_spaces()?;

        let role = GroupRole::Script {
            name,
            symbol: &symbol,
        };
        let mut group = self.parse_group(role, None)?;
        while let Some(ParseNode::Internal(_)) = group {
            group = self.parse_group(role, None)?;
        }
        group.ok_or_else(|| {
            ParseError::with_token(
                ParseErrorKind::ExpectedGroupAfterSymbol {
                    symbol: symbol.text().to_owned(),
                },
                &symbol,
            )
        })
    }

    /// A nucleus, where `$...$` switches a text-mode expression into math.
    ///
    /// Commands that take the rest of the group as their body (`\left`,
    /// `\begin`, `\color` and the switches) read it in their own handlers.
    fn parse_implicit_group(
        &mut self,
        break_on_token_text: Option<&BreakToken>,
    ) -> Result<Option<ParseNode>, ParseError> {
        let mode = self.mode;
        let token = self.fetch()?;
        if token.text != "$" {
            return self.parse_group(GroupRole::Atom, break_on_token_text);
        }
        if mode == Mode::Math {
            return Err(ParseError::with_token(ParseErrorKind::DollarInMathMode, token));
        }

        let loc = token.loc.clone();
        self.consume();
        self.switch_mode(Mode::Math);
        let body = self.parse_expression(false, Some(&BreakToken::Dollar))?;
        self.expect("$", true)?;
        self.switch_mode(mode);

        Ok(Some(ParseNode::Styling(ParseNodeStyling {
            mode: Mode::Math,
            loc,
            style: StyleVariant::Text,
            body,
        })))
    }

    /// Parses a braced group, or else one function application or symbol.
    ///
    /// Returns `None` when the lookahead token starts none of these. An
    /// undefined control sequence is an error, or an `error` leaf when
    /// [`Settings::throw_on_error`] is off.
    pub fn parse_group(
        &mut self,
        role: GroupRole<'_>,
        break_on_token_text: Option<&BreakToken>,
    ) -> Result<Option<ParseNode>, ParseError> {
        let first = self.fetch()?.clone();

        if first.text == "{" {
            self.consume();
            self.gullet.begin_group();
            let body = self.parse_expression(false, Some(&BreakToken::RightBrace))?;
            let last = self.fetch()?.clone();
            if last.text != "}" {
                return Err(ParseError::with_token(
                    ParseErrorKind::UnmatchedBrace {
                        found: last.text().to_owned(),
                    },
                    &last,
                ));
            }
            self.consume();
            self.gullet.end_group()?;

            return Ok(Some(ParseNode::OrdGroup(ParseNodeOrdGroup {
                mode: self.mode,
                loc: SourceLocation::range(first.loc, last.loc),
                body,
                semisimple: false,
            })));
        }

        if let Some(node) = self.parse_function(break_on_token_text, role)? {
            return Ok(Some(node));
        }
        if let Some(node) = self.parse_symbol()? {
            return Ok(Some(node));
        }

        let name = first.text();
        if !name.starts_with('\\') || IMPLICIT_COMMANDS.contains(name) {
            return Ok(None);
        }
        let error = ParseError::with_token(
            ParseErrorKind::UndefinedControlSequence {
                name: name.to_owned(),
            },
            &first,
        );
        if self.settings.throw_on_error {
            return Err(error);
        }
        self.consume();
        Ok(Some(ParseNode::Error(ParseNodeErrorLeaf {
            mode: self.mode,
            text: name.to_owned(),
            message: error.to_string(),
            color: self.settings.error_color.clone(),
            loc: first.loc,
        })))
    }

    /// Parses a function application if the lookahead token names a
    /// function.
    ///
    /// In a script or argument position, a function that takes arguments
    /// needs a higher greediness than the enclosing `^`, `_` or function,
    /// so `\frac\frac12 3` fails while `x^\frac12` parses.
    pub fn parse_function(
        &mut self,
        break_on_token_text: Option<&BreakToken>,
        role: GroupRole<'_>,
    ) -> Result<Option<ParseNode>, ParseError> {
        let ctx = self.ctx;
        let token = self.fetch()?.clone();
        let Some(spec) = ctx.functions.get(token.text()) else {
            return Ok(None);
        };
        let func = token.text();

        if !spec.acts_as_symbol() {
            match role {
                GroupRole::Script { name, symbol } if spec.greediness <= SUPSUB_GREEDINESS => {
                    return Err(ParseError::with_token(
                        ParseErrorKind::FunctionRequiresArguments {
                            func: func.to_owned(),
                            context: name.to_owned(),
                        },
                        symbol,
                    ));
                }
                GroupRole::Argument { parent, greediness } if spec.greediness <= greediness => {
                    return Err(ParseError::with_token(
                        ParseErrorKind::FunctionAsArgument {
                            func: func.to_owned(),
                            parent: parent.to_owned(),
                        },
                        &token,
                    ));
                }
                _ => {}
            }
        }
        self.consume();

        if self.mode == Mode::Text && !spec.allowed_in_text {
            return Err(ParseError::with_token(
                ParseErrorKind::FunctionNotAllowedInTextMode {
                    func: func.to_owned(),
                },
                &token,
            ));
        }
        if self.mode == Mode::Math && !spec.allowed_in_math {
            return Err(ParseError::with_token(
                ParseErrorKind::FunctionNotAllowedInMathMode {
                    func: func.to_owned(),
                },
                &token,
            ));
        }

        let (args, opt_args) = self.parse_arguments(func, spec)?;
        self.call_function(func, args, opt_args, Some(&token), break_on_token_text)
            .map(Some)
    }

    /// Runs the handler registered under `name`.
    pub fn call_function(
        &mut self,
        name: &str,
        args: Vec<ParseNode>,
        opt_args: Vec<Option<ParseNode>>,
        token: Option<&Token>,
        break_on_token_text: Option<&BreakToken>,
    ) -> Result<ParseNode, ParseError> {
        let ctx = self.ctx;
        let Some(spec) = ctx.functions.get(name) else {
            return Err(ParseError::new(ParseErrorKind::UndefinedControlSequence {
                name: name.to_owned(),
            }));
        };
        let context = FunctionContext {
            func_name: name.to_owned(),
            parser: self,
            token,
            break_on_token_text,
        };
        functions::dispatch(spec.kind, context, args, opt_args)
    }

    /// Parses the optional then required arguments of a function or
    /// environment. `func` looks like `\name` or `\begin{name}`.
    ///
    /// Missing optional arguments are `None`; a missing required one is an
    /// error.
    pub fn parse_arguments(
        &mut self,
        func: &str,
        spec: &dyn Spec,
    ) -> Result<(Vec<ParseNode>, Vec<Option<ParseNode>>), ParseError> {
        let mut args = Vec::with_capacity(spec.num_args());
        let mut opt_args = Vec::with_capacity(spec.num_optional_args());
        let role = GroupRole::Argument {
            parent: func,
            greediness: spec.greediness(),
        };

        for i in 0..spec.num_optional_args() + spec.num_args() {
            let optional = i < spec.num_optional_args();
            let arg_type = spec
                .arg_types()
                .and_then(|types| types.get(i))
                .copied()
                .or_else(|| spec.primitive().then_some(ArgType::Primitive));

            if !optional || self.mode == Mode::Math {
                self.consume_spaces()?;
            }
            let arg = self.parse_group_of_type(arg_type, optional, role)?;

            if optional {
                opt_args.push(arg);
                continue;
            }
            let Some(arg) = arg else {
                let next = self.fetch()?;
                return Err(ParseError::with_token(
                    ParseErrorKind::ExpectedGroupAfterFunction {
                        func: func.to_owned(),
                    },
                    next,
                ));
            };
            args.push(arg);
        }

        Ok((args, opt_args))
    }

    fn parse_group_of_type(
        &mut self,
        arg_type: Option<ArgType>,
        optional: bool,
        role: GroupRole<'_>,
    ) -> Result<Option<ParseNode>, ParseError> {
        match arg_type {
            Some(ArgType::Color) => self.parse_color_group(optional),
            Some(ArgType::Size) => self.parse_size_group(optional),
            Some(ArgType::Raw) => Ok(self
                .parse_string_group("raw argument", optional)?
                .map(|token| {
                    ParseNode::Raw(ParseNodeRaw {
                        mode: Mode::Text,
                        loc: token.loc,
                        string: token.text.into(),
                    })
                })),
            Some(ArgType::Mode(mode)) => self.parse_argument_group(optional, Some(mode), role),
            Some(ArgType::Hbox) => {
                let mode = self.mode;
                Ok(self
                    .parse_argument_group(optional, Some(Mode::Text), role)?
                    .map(|group| {
                        ParseNode::Styling(ParseNodeStyling {
                            mode,
                            loc: None,
                            style: StyleVariant::Text,
                            body: vec![group],
                        })
                    }))
            }
            Some(ArgType::Primitive) => self.parse_group(role, None),
            Some(ArgType::Original) | None => self.parse_argument_group(optional, None, role),
        }
    }

    /// An argument in `mode` (the current one if `None`): a `[...]` group
    /// when optional, otherwise a braced group or a single nucleus.
    fn parse_argument_group(
        &mut self,
        optional: bool,
        mode: Option<Mode>,
        role: GroupRole<'_>,
    ) -> Result<Option<ParseNode>, ParseError> {
        let outer_mode = self.mode;
        if let Some(mode) = mode {
            self.switch_mode(mode);
        }
        let result = if optional {
            self.parse_optional_group()
        } else {
            self.parse_group(role, None)
        };
        self.switch_mode(outer_mode);
        result
    }

    fn parse_optional_group(&mut self) -> Result<Option<ParseNode>, ParseError> {
        if self.fetch()?.text != "[" {
            return Ok(None);
        }
        let first = self.fetch()?.clone();
        self.consume();

        self.gullet.begin_group();
        let body = self.parse_expression(false, Some(&BreakToken::RightBracket))?;
        let last = self.fetch()?.clone();
        if last.text != "]" {
            return Err(ParseError::with_token(
                ParseErrorKind::UnmatchedBracket {
                    found: last.text().to_owned(),
                },
                &last,
            ));
        }
        self.consume();
        self.gullet.end_group()?;

        Ok(Some(ParseNode::OrdGroup(ParseNodeOrdGroup {
            mode: self.mode,
            loc: SourceLocation::range(first.loc, last.loc),
            body,
            semisimple: false,
        })))
    }

    /// Reads the raw text of a `{...}` group, or of a `[...]` group when
    /// `optional`, as one token spanning the contents.
    fn parse_string_group(
        &mut self,
        context: &str,
        optional: bool,
    ) -> Result<Option<Token>, ParseError> {
        let (open, close) = if optional { ("[", "]") } else { ("{", "}") };
        if optional && self.fetch()?.text != open {
            return Ok(None);
        }
        self.expect(open, true)?;

        let first = self.fetch()?.clone();
        let mut last_loc = first.loc.clone();
        let mut text = String::new();
        loop {
            let next = self.fetch()?;
            if next.text == close {
                break;
            }
            if next.is_eof() {
                return Err(ParseError::with_token(
                    ParseErrorKind::UnexpectedEndOfInput {
                        context: context.to_owned(),
                    },
                    next,
                ));
            }
            text.push_str(next.text());
            last_loc.clone_from(&next.loc);
            self.consume();
        }
        self.expect(close, true)?;

        Ok(Some(Token::new(text, SourceLocation::range(first.loc, last_loc))))
    }

    /// Reads the longest run of tokens whose concatenated text satisfies
    /// `validator`, as one token spanning the run.
    fn parse_regex_group<F>(&mut self, context: &str, validator: F) -> Result<Token, ParseError>
    where
        F: Fn(&str) -> bool,
    {
        let first = self.fetch()?.clone();
        let mut last_loc = first.loc.clone();
        let mut text = String::new();
        loop {
            let next = self.fetch()?;
            if next.is_eof() {
                break;
            }
            let candidate = format!("{text}{}", next.text);
            if !validator(&candidate) {
                break;
            }
            text = candidate;
            last_loc.clone_from(&next.loc);
            self.consume();
        }

        if text.is_empty() {
            return Err(ParseError::with_token(
                ParseErrorKind::InvalidValue {
                    context: context.to_owned(),
                    value: first.text().to_owned(),
                },
                &first,
            ));
        }
        Ok(Token::new(text, SourceLocation::range(first.loc, last_loc)))
    }

    /// Parses a color argument into a `color-token`. A six-digit hex color
    /// gets its `#`.
    pub fn parse_color_group(&mut self, optional: bool) -> Result<Option<ParseNode>, ParseError> {
        let Some(token) = self.parse_string_group("color", optional)? else {
            return Ok(None);
        };
        let text = token.text();
        if !is_color(text) {
            return Err(ParseError::with_token(
                ParseErrorKind::InvalidColor {
                    color: text.to_owned(),
                },
                &token,
            ));
        }
        let color = if text.len() == 6 && !text.starts_with('#') && text.chars().all(|c| c.is_ascii_hexdigit()) {
            format!("#{text}")
        } else {
            text.to_owned()
        };
        Ok(Some(ParseNode::ColorToken(ParseNodeColorToken {
            mode: self.mode,
            loc: token.loc,
            color,
        })))
    }

    /// Parses a dimension argument into a `size` node.
    ///
    /// A required size may be given without braces, as in `\kern1em`, and
    /// then extends over the longest run of tokens that still looks like a
    /// size. An empty braced size is `0pt` with `is_blank` set.
    pub fn parse_size_group(&mut self, optional: bool) -> Result<Option<ParseNode>, ParseError> {
        let token = if !optional && self.fetch()?.text != "{" {
            Some(self.parse_regex_group("size", is_size_prefix)?)
        } else {
            self.parse_string_group("size", optional)?
        };
        let Some(mut token) = token else {
            return Ok(None);
        };

        let is_blank = !optional && token.text.is_empty();
        if is_blank {
            token.text = "0pt".into();
        }
        let Some(value) = parse_measurement(token.text()) else {
            return Err(ParseError::with_token(
                ParseErrorKind::InvalidSize {
                    size: token.text().to_owned(),
                },
                &token,
            ));
        };
        if !valid_unit(&value) {
            return Err(ParseError::with_token(
                ParseErrorKind::InvalidUnit { unit: value.unit },
                &token,
            ));
        }

        Ok(Some(ParseNode::Size(ParseNodeSize {
            mode: self.mode,
            loc: token.loc,
            value,
            is_blank,
        })))
    }

    /// Parses one symbol from the symbol table, or a non-ASCII character as
    /// a text-mode ordinary, reporting it to the strict policy.
    fn parse_symbol(&mut self) -> Result<Option<ParseNode>, ParseError> {
        let nucleus = self.fetch()?.clone();
        let text = nucleus.text();
        let mode = self.mode;

        let node = if let Some(info) = self.ctx.symbols.get(mode, text) {
            symbol_node(info.group, mode, nucleus.loc.clone(), text.to_owned())
        } else if let Some(ch) = text.chars().next()
            && !ch.is_ascii()
        {
            if !supported_codepoint(ch) {
                self.report_nonstrict(
                    "unknownSymbol",
                    &format!(
                        "Unrecognized Unicode character \"{ch}\" ({})",
                        u32::from(ch)
                    ),
                    Some(&nucleus),
                )?;
            } else if mode == Mode::Math {
                self.report_nonstrict(
                    "unicodeTextInMathMode",
                    &format!("Unicode text character \"{ch}\" used in math mode"),
                    Some(&nucleus),
                )?;
            }
            ParseNode::TextOrd(ParseNodeTextOrd {
                mode,
                loc: nucleus.loc.clone(),
                text: text.to_owned(),
            })
        } else {
            return Ok(None);
        };

        self.consume();
        Ok(Some(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StrictMode, StrictSetting};

    fn parse_with(input: &str, settings: &Settings) -> Result<Vec<ParseNode>, ParseError> {
        let ctx = KatexContext::default();
        Parser::new(input, settings, &ctx).parse()
    }

    fn parse(input: &str) -> Result<Vec<ParseNode>, ParseError> {
        parse_with(input, &Settings::default())
    }

    fn error_kind(input: &str) -> ParseErrorKind {
        *parse(input).unwrap_err().kind
    }

    fn strip_locations(nodes: &mut [ParseNode]) {
        for node in nodes {
            *node.location_mut() = None;
            for child in node.children_mut() {
                strip_locations(core::slice::from_mut(child));
            }
        }
    }

    #[test]
    fn test_size_prefixes() {
        for text in ["", "-", "+ ", "1", "1.", ".5", "-1.5 em", "3pt", "3 p"] {
            assert!(is_size_prefix(text), "{text:?}");
        }
        for text in ["em", "1emx", "1.5.", "x", "1 em x"] {
            assert!(!is_size_prefix(text), "{text:?}");
        }
    }

    #[test]
    fn test_colors() {
        for text in ["red", "#abc", "#A0B1C2", "a0b1c2"] {
            assert!(is_color(text), "{text}");
        }
        for text in ["", "#ab", "#abcd", "red5", "#red"] {
            assert!(!is_color(text), "{text}");
        }
    }

    #[test]
    fn test_infix_rewrite() {
        let nodes = parse(r"1 \over 2").unwrap();
        assert_eq!(nodes.len(), 1);
        let ParseNode::Genfrac(frac) = &nodes[0] else {
            panic!("expected genfrac, got {:?}", nodes[0]);
        };
        assert!(frac.has_bar_line);
        assert!(matches!(&frac.numer, ParseNode::OrdGroup(group) if group.body.len() == 1));

        assert!(matches!(
            error_kind(r"1 \over 2 \over 3"),
            ParseErrorKind::MultipleInfixOperators
        ));
    }

    #[test]
    fn test_scripts_in_either_order() {
        let mut first = parse("1^2_3").unwrap();
        let mut second = parse("1_3^2").unwrap();
        strip_locations(&mut first);
        strip_locations(&mut second);
        assert_eq!(first, second);

        assert!(matches!(error_kind("x^1^2"), ParseErrorKind::DoubleSuperscript));
        assert!(matches!(error_kind("x_1_2"), ParseErrorKind::DoubleSubscript));
        assert!(matches!(
            error_kind("x^"),
            ParseErrorKind::ExpectedGroupAfterSymbol { .. }
        ));
    }

    #[test]
    fn test_primes() {
        let nodes = parse("f''^2").unwrap();
        let ParseNode::SupSub(supsub) = &nodes[0] else {
            panic!("expected supsub");
        };
        let Some(ParseNode::OrdGroup(sup)) = supsub.sup.as_deref() else {
            panic!("expected ordgroup superscript");
        };
        assert_eq!(sup.body.len(), 3);
        assert_eq!(sup.body[0].text(), Some("\\prime"));

        assert!(matches!(error_kind("f^2'"), ParseErrorKind::DoubleSuperscript));
    }

    #[test]
    fn test_limit_controls() {
        let nodes = parse(r"\sum\nolimits_1").unwrap();
        let ParseNode::SupSub(supsub) = &nodes[0] else {
            panic!("expected supsub");
        };
        let Some(ParseNode::Op(op)) = supsub.base.as_deref() else {
            panic!("expected op base");
        };
        assert!(!op.limits);
        assert!(op.always_handle_sup_sub);

        assert!(matches!(
            error_kind(r"x\limits"),
            ParseErrorKind::LimitControlsMustFollowMathOperator
        ));
    }

    #[test]
    fn test_greediness() {
        assert!(matches!(
            error_kind(r"\frac\frac 1 2 3"),
            ParseErrorKind::FunctionAsArgument { .. }
        ));
        parse(r"\frac{\frac 1 2}3").unwrap();
        parse(r"x^\frac12").unwrap();
        parse(r"x^\sum").unwrap();

        let err = parse(r"x^\sqrt2").unwrap_err();
        assert_eq!(
            err.kind.to_string(),
            r"Got function '\sqrt' with no arguments as superscript"
        );
        // Reported at the `^`, not at the function.
        assert_eq!(err.position, Some(1));
    }

    #[test]
    fn test_text_ligatures() {
        let nodes = parse(r"\text{a--b---c``d''}").unwrap();
        let ParseNode::Text(text) = &nodes[0] else {
            panic!("expected text");
        };
        let texts: Vec<_> = text.body.iter().filter_map(ParseNode::text).collect();
        assert_eq!(texts, ["a", "--", "b", "---", "c", "``", "d", "''"]);
        assert_eq!(text.body[1].location().map(SourceLocation::text), Some("--"));
    }

    #[test]
    fn test_size_groups() {
        let settings = Settings::default();
        let ctx = KatexContext::default();

        let mut parser = Parser::new("{1.5 em}", &settings, &ctx);
        let Some(ParseNode::Size(size)) = parser.parse_size_group(false).unwrap() else {
            panic!("expected size");
        };
        assert_eq!(size.value.number, 1.5);
        assert_eq!(size.value.unit, "em");
        assert!(!size.is_blank);

        let mut parser = Parser::new("-3pt x", &settings, &ctx);
        let Some(ParseNode::Size(size)) = parser.parse_size_group(false).unwrap() else {
            panic!("expected size");
        };
        assert_eq!(size.value.number, -3.0);
        assert_eq!(parser.fetch().unwrap().text(), "x");

        let mut parser = Parser::new("{}", &settings, &ctx);
        let Some(ParseNode::Size(size)) = parser.parse_size_group(false).unwrap() else {
            panic!("expected size");
        };
        assert!(size.is_blank);
        assert_eq!(size.value.unit, "pt");

        let mut parser = Parser::new("x", &settings, &ctx);
        assert!(parser.parse_size_group(true).unwrap().is_none());

        assert!(matches!(error_kind(r"\kern{1xx}"), ParseErrorKind::InvalidUnit { .. }));
        assert!(matches!(error_kind(r"\kern{em}"), ParseErrorKind::InvalidSize { .. }));
    }

    #[test]
    fn test_color_groups() {
        let settings = Settings::default();
        let ctx = KatexContext::default();
        let mut parser = Parser::new("{ff0000}", &settings, &ctx);
        let Some(ParseNode::ColorToken(color)) = parser.parse_color_group(false).unwrap() else {
            panic!("expected color");
        };
        assert_eq!(color.color, "#ff0000");

        assert!(matches!(
            error_kind(r"\textcolor{#12}{x}"),
            ParseErrorKind::InvalidColor { .. }
        ));
    }

    #[test]
    fn test_braces() {
        assert!(matches!(
            error_kind("{x"),
            ParseErrorKind::UnmatchedBrace { found } if found == "EOF"
        ));
        assert!(matches!(
            error_kind(r"\sqrt[3{x}"),
            ParseErrorKind::UnmatchedBracket { .. }
        ));

        let nodes = parse("{x}").unwrap();
        assert_eq!(nodes[0].location().map(SourceLocation::text), Some("{x}"));
    }

    #[test]
    fn test_dollar() {
        assert!(matches!(error_kind("a$b"), ParseErrorKind::DollarInMathMode));

        let nodes = parse(r"\text{a $x$}").unwrap();
        let ParseNode::Text(text) = &nodes[0] else {
            panic!("expected text");
        };
        assert!(matches!(
            text.body.last(),
            Some(ParseNode::Styling(styling)) if styling.mode == Mode::Math
        ));
    }

    #[test]
    fn test_dangling_tokens() {
        assert!(matches!(
            error_kind("x}"),
            ParseErrorKind::ExpectedToken { expected, found } if expected == "EOF" && found == "}"
        ));
        assert!(matches!(error_kind(r"x\right)"), ParseErrorKind::UnmatchedRight));
        assert!(matches!(
            error_kind(r"x\end{matrix}"),
            ParseErrorKind::UnmatchedEnd { name } if name == "matrix"
        ));
        assert!(matches!(error_kind("a&b"), ParseErrorKind::ExpectedToken { .. }));
    }

    #[test]
    fn test_undefined_control_sequence() {
        let err = parse(r"x\foo").unwrap_err();
        assert!(matches!(
            err.kind.as_ref(),
            ParseErrorKind::UndefinedControlSequence { name } if name == r"\foo"
        ));
        assert_eq!(err.position, Some(1));

        let settings = Settings::builder().throw_on_error(false).build();
        let nodes = parse_with(r"x\foo y", &settings).unwrap();
        assert_eq!(nodes.len(), 3);
        let ParseNode::Error(leaf) = &nodes[1] else {
            panic!("expected error leaf");
        };
        assert_eq!(leaf.text, r"\foo");
        assert_eq!(leaf.color, "#cc0000");
    }

    #[test]
    fn test_unicode_text_in_math_mode() {
        let settings = Settings::default();
        let ctx = KatexContext::default();
        let mut parser = Parser::new("\u{436}", &settings, &ctx);
        let nodes = parser.parse().unwrap();
        assert!(matches!(&nodes[0], ParseNode::TextOrd(ord) if ord.text == "\u{436}"));
        let warnings = parser.take_warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, "unicodeTextInMathMode");

        let strict = Settings::builder()
            .strict(StrictSetting::Mode(StrictMode::Error))
            .build();
        let err = parse_with("\u{2603}", &strict).unwrap_err();
        assert!(matches!(
            err.kind.as_ref(),
            ParseErrorKind::StrictMode { code, .. } if code == "unknownSymbol"
        ));
    }
}

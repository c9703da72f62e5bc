//! `\begin{name} ... \end{name}`

use crate::KatexContext;
use crate::define_environment::{self, EnvContext};
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, take_args,
};
use crate::parser::GroupRole;
use crate::parser::parse_node::{NodeType, ParseNode, ParseNodeEnvironment};
use crate::types::{ArgType, Mode, ParseError, ParseErrorKind};

/// Registers `\begin` and `\end`. The name argument is read in text mode.
pub fn define_environment(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Environment,
        names: &["\\begin", "\\end"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![ArgType::Mode(Mode::Text)]),
            ..Default::default()
        },
    });
}

/// Concatenates the characters of a braced name such as `{pmatrix}`.
fn environment_name(name_group: &ParseNode) -> Result<String, ParseError> {
    let invalid = |value: String| {
        ParseError::with_token(
            ParseErrorKind::InvalidValue {
                context: "environment name".to_owned(),
                value,
            },
            name_group,
        )
    };
    let ParseNode::OrdGroup(group) = name_group else {
        return Err(invalid(NodeType::from(name_group).to_string()));
    };
    group.body.iter().try_fold(String::new(), |mut name, node| {
        let text = node
            .text()
            .ok_or_else(|| invalid(NodeType::from(node).to_string()))?;
        name.push_str(text);
        Ok(name)
    })
}

/// `\begin` runs the environment and checks its `\end`. `\end` on its own
/// only reports its name, for the `\begin` handler to compare.
pub(super) fn environment(
    context: FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [name_group] = take_args(args, &context.func_name)?;
    let name = environment_name(&name_group)?;
    let loc = context.loc();
    let parser = context.parser;

    if context.func_name != "\\begin" {
        return Ok(ParseNode::Environment(Box::new(ParseNodeEnvironment {
            mode: parser.mode,
            loc,
            name,
            name_group,
        })));
    }

    let ctx = parser.ctx;
    let Some(env) = ctx.environments.get(&name) else {
        return Err(ParseError::with_token(
            ParseErrorKind::UnknownEnvironment { name },
            &name_group,
        ));
    };

    let (env_args, env_opt_args) = parser.parse_arguments(&format!("\\begin{{{name}}}"), env)?;
    let env_context = EnvContext {
        mode: parser.mode,
        env_name: name.clone(),
        parser: &mut *parser,
    };
    let result = define_environment::dispatch(env.kind, env_context, env_args, env_opt_args)?;

    parser.expect("\\end", false)?;
    match parser.parse_function(None, GroupRole::Atom)? {
        Some(ParseNode::Environment(end)) if end.name == name => Ok(result),
        Some(ParseNode::Environment(end)) => Err(ParseError::with_token(
            ParseErrorKind::MismatchedEnvironment {
                begin: name,
                end: end.name,
            },
            &end.name_group,
        )),
        _ => Err(ParseError::new(ParseErrorKind::ExpectedGroupAfterFunction {
            func: "\\end".to_owned(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_node::ParseNodeTextOrd;

    fn letters(text: &str) -> ParseNode {
        let body = text
            .chars()
            .map(|c| {
                ParseNode::TextOrd(ParseNodeTextOrd {
                    mode: Mode::Text,
                    loc: None,
                    text: c.to_string(),
                })
            })
            .collect();
        ParseNode::ord_group(Mode::Text, body)
    }

    #[test]
    fn test_environment_name() {
        assert_eq!(environment_name(&letters("pmatrix")).unwrap(), "pmatrix");
        assert_eq!(environment_name(&letters("")).unwrap(), "");

        let bare = ParseNode::TextOrd(ParseNodeTextOrd {
            mode: Mode::Text,
            loc: None,
            text: "x".to_owned(),
        });
        let err = environment_name(&bare).unwrap_err();
        assert!(matches!(*err.kind, ParseErrorKind::InvalidValue { .. }));
    }
}

//! The registries shared by every parse

use crate::namespace::KeyMap;

use crate::{
    define_environment,
    define_environment::{EnvDefSpec, EnvSpec},
    define_function::{FunctionDefSpec, FunctionSpec},
    functions,
    symbols::{Symbols, create_symbols},
};

/// Functions, environments and symbols known to the parser.
///
/// A context is built once and then only read, so one instance can serve any
/// number of parses, across threads. [`KatexContext::default`] holds the full
/// builtin set; [`KatexContext::new`] starts empty for callers that register
/// their own.
#[derive(Debug)]
pub struct KatexContext {
    /// Registered functions, one entry per name.
    pub functions: KeyMap<String, FunctionSpec>,
    /// Math and text symbol tables.
    pub symbols: Symbols,
    /// Registered environments, one entry per name.
    pub environments: KeyMap<String, EnvSpec>,
}

impl KatexContext {
    /// A context with no functions or environments and an empty symbol
    /// table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            functions: KeyMap::default(),
            symbols: Symbols::new(),
            environments: KeyMap::default(),
        }
    }

    /// Registers a function under each of its names, replacing any previous
    /// entry.
    pub fn define_function(&mut self, spec: FunctionDefSpec<'_>) {
        let data = FunctionSpec::new(spec.kind, spec.props);
        for name in spec.names {
            self.functions.insert((*name).to_owned(), data.clone());
        }
    }

    /// Registers an environment under each of its names.
    pub fn define_environment(&mut self, spec: EnvDefSpec<'_>) {
        let data = EnvSpec::new(spec.kind, spec.props);
        for name in spec.names {
            self.environments.insert((*name).to_owned(), data.clone());
        }
    }
}

impl Default for KatexContext {
    fn default() -> Self {
        let mut ctx = Self {
            symbols: create_symbols(),
            ..Self::new()
        };
        functions::define_accent(&mut ctx);
        functions::define_arrow(&mut ctx);
        functions::define_color(&mut ctx);
        functions::define_cr(&mut ctx);
        functions::define_def(&mut ctx);
        functions::define_delimsizing(&mut ctx);
        functions::define_enclose(&mut ctx);
        functions::define_environment(&mut ctx);
        functions::define_font(&mut ctx);
        functions::define_genfrac(&mut ctx);
        functions::define_kern(&mut ctx);
        functions::define_lap(&mut ctx);
        functions::define_mclass(&mut ctx);
        functions::define_op(&mut ctx);
        functions::define_overline(&mut ctx);
        functions::define_phantom(&mut ctx);
        functions::define_raisebox(&mut ctx);
        functions::define_rule(&mut ctx);
        functions::define_sizing(&mut ctx);
        functions::define_sqrt(&mut ctx);
        functions::define_styling(&mut ctx);
        functions::define_text(&mut ctx);
        functions::define_underline(&mut ctx);

        define_environment::define_array(&mut ctx);
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::define_function::{FunctionKind, FunctionPropSpec};

    #[test]
    fn test_default_registries() {
        let ctx = KatexContext::default();
        assert!(ctx.functions.contains_key("\\frac"));
        assert!(ctx.functions.contains_key("\\newcommand"));
        assert!(ctx.environments.contains_key("pmatrix"));
        assert!(!ctx.functions.contains_key("\\href"));
    }

    #[test]
    fn test_define_function_registers_every_name() {
        let mut ctx = KatexContext::new();
        ctx.define_function(FunctionDefSpec {
            kind: FunctionKind::Overline,
            names: &["\\a", "\\b"],
            props: FunctionPropSpec {
                num_args: 1,
                ..Default::default()
            },
        });
        assert_eq!(ctx.functions.len(), 2);
        assert_eq!(ctx.functions["\\b"].num_args, 1);
    }
}

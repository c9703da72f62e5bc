//! Scoped definitions with TeX grouping semantics
//!
//! A `Namespace` holds nameable things (macros here) that can be set either
//! globally or local to the innermost group. Leaving a group undoes its local
//! changes through an undo stack, the way TeX's save stack does.

use rapidhash::{RapidHashMap, RapidHashSet};

use crate::types::{ParseError, ParseErrorKind};

/// Make it easier to switch between different hash backends.
pub type KeyMap<K, V> = RapidHashMap<K, V>;
/// Alias for the default hash set.
pub type KeySet<K> = RapidHashSet<K>;
/// Name-keyed map, used for user macro tables.
pub type Mapping<V> = KeyMap<String, V>;

/// Scoped name table layered over a static builtin table.
///
/// `get` and local `set` are O(1); global `set` is O(depth).
#[derive(Debug)]
pub struct Namespace<V: Clone + 'static> {
    current: Mapping<V>,
    builtins: &'static phf::Map<&'static str, V>,
    /// One map per open group: the value each name had before the group
    /// first touched it (`None` meaning undefined).
    undef_stack: Vec<KeyMap<String, Option<V>>>,
}

impl<V: Clone> Namespace<V> {
    /// Creates a namespace whose root scope starts as `global`.
    #[must_use]
    pub const fn new(builtins: &'static phf::Map<&'static str, V>, global: Mapping<V>) -> Self {
        Self {
            current: global,
            builtins,
            undef_stack: Vec::new(),
        }
    }

    /// Opens a group.
    pub fn begin_group(&mut self) {
        self.undef_stack.push(KeyMap::default());
    }

    fn restore_changes(&mut self, undefs: KeyMap<String, Option<V>>) {
        for (name, previous) in undefs {
            match previous {
                Some(v) => {
                    self.current.insert(name, v);
                }
                None => {
                    self.current.remove(&name);
                }
            }
        }
    }

    /// Closes the innermost group, restoring what it changed locally.
    pub fn end_group(&mut self) -> Result<(), ParseError> {
        let undefs = self
            .undef_stack
            .pop()
            .ok_or_else(|| ParseError::new(ParseErrorKind::UnbalancedNamespaceDestruction))?;
        self.restore_changes(undefs);
        Ok(())
    }

    /// Closes every open group and returns how many there were.
    pub fn end_groups(&mut self) -> usize {
        let mut count = 0;
        while let Some(undefs) = self.undef_stack.pop() {
            self.restore_changes(undefs);
            count += 1;
        }
        count
    }

    /// Number of open groups.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.undef_stack.len()
    }

    /// Whether `name` has a definition in scope or among the builtins.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.current.contains_key(name) || self.builtins.contains_key(name)
    }

    /// The definition of `name` in scope, falling back to the builtins.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.current.get(name).or_else(|| self.builtins.get(name))
    }

    /// Defines `name`, or deletes it when `value` is `None`.
    ///
    /// A local set is undone when the innermost group closes. A global set
    /// survives every enclosing group.
    pub fn set(&mut self, name: &str, value: Option<V>, global: bool) {
        if global {
            // Drop every pending undo for the name, then schedule the new
            // value as the innermost undo so a later local set inside this
            // group still restores to it.
            for level in &mut self.undef_stack {
                level.remove(name);
            }
            if let Some(top) = self.undef_stack.last_mut() {
                top.insert(name.to_owned(), value.clone());
            }
        } else if let Some(top) = self.undef_stack.last_mut()
            && !top.contains_key(name)
        {
            top.insert(name.to_owned(), self.current.get(name).cloned());
        }

        match value {
            Some(v) => {
                self.current.insert(name.to_owned(), v);
            }
            None => {
                self.current.remove(name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phf::phf_map;

    static BUILTINS: phf::Map<&'static str, &'static str> = phf_map! {
        "\\builtin" => "b",
    };

    fn namespace() -> Namespace<&'static str> {
        Namespace::new(&BUILTINS, Mapping::default())
    }

    #[test]
    fn test_local_set_is_undone() {
        let mut ns = namespace();
        ns.set("\\a", Some("outer"), false);
        ns.begin_group();
        ns.set("\\a", Some("inner"), false);
        ns.set("\\a", Some("inner2"), false);
        ns.set("\\new", Some("n"), false);
        assert_eq!(ns.get("\\a"), Some(&"inner2"));
        ns.end_group().unwrap();

        assert_eq!(ns.get("\\a"), Some(&"outer"));
        assert_eq!(ns.get("\\new"), None);
        assert!(!ns.has("\\new"));
    }

    #[test]
    fn test_global_set_survives_groups() {
        let mut ns = namespace();
        ns.begin_group();
        ns.begin_group();
        ns.set("\\g", Some("x"), false);
        ns.set("\\g", Some("global"), true);
        ns.end_group().unwrap();
        ns.end_group().unwrap();
        assert_eq!(ns.get("\\g"), Some(&"global"));
    }

    #[test]
    fn test_local_after_global_restores_global() {
        let mut ns = namespace();
        ns.begin_group();
        ns.set("\\g", Some("global"), true);
        ns.begin_group();
        ns.set("\\g", Some("local"), false);
        ns.end_group().unwrap();
        assert_eq!(ns.get("\\g"), Some(&"global"));
        ns.end_group().unwrap();
        assert_eq!(ns.get("\\g"), Some(&"global"));
    }

    #[test]
    fn test_delete_and_builtins() {
        let mut ns = namespace();
        assert_eq!(ns.get("\\builtin"), Some(&"b"));
        ns.begin_group();
        ns.set("\\builtin", Some("shadow"), false);
        assert_eq!(ns.get("\\builtin"), Some(&"shadow"));
        ns.end_group().unwrap();
        assert_eq!(ns.get("\\builtin"), Some(&"b"));

        ns.set("\\x", Some("x"), false);
        ns.set("\\x", None, false);
        assert_eq!(ns.get("\\x"), None);
    }

    #[test]
    fn test_unbalanced_end_group() {
        let mut ns = namespace();
        let err = ns.end_group().unwrap_err();
        assert!(matches!(
            err.kind.as_ref(),
            ParseErrorKind::UnbalancedNamespaceDestruction
        ));

        ns.begin_group();
        ns.begin_group();
        assert_eq!(ns.depth(), 2);
        assert_eq!(ns.end_groups(), 2);
        assert_eq!(ns.depth(), 0);
    }
}

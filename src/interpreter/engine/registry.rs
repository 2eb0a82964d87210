use std::collections::HashMap;

use crate::{
    interpreter::value::{
        class::{Class, ClassKey},
        function::NativeFunction,
    },
    ops::OpTag,
};

/// The engine-local overload table: a two-level map from class identity to
/// operation tag to implementation.
///
/// Resolution combines two channels. For each class along a value's parent
/// chain, an engine-local registration wins first, then an operator the
/// class declares on itself; the walk moves to the parent when neither
/// hits. The chain is finite, so resolution always terminates, and "no
/// overload" sends the evaluator to the native fallback.
#[derive(Debug, Default)]
pub struct OverloadTable {
    entries: HashMap<ClassKey, HashMap<OpTag, NativeFunction>>,
}

impl OverloadTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `func` for `(class, tag)`, replacing any previous
    /// registration.
    pub fn insert(&mut self, class: &Class, tag: OpTag, func: NativeFunction) {
        self.entries.entry(class.key()).or_default().insert(tag, func);
    }

    /// The registration for exactly `(class, tag)`, ignoring declared
    /// operators and parents.
    #[must_use]
    pub fn get(&self, class: &Class, tag: OpTag) -> Option<&NativeFunction> {
        self.entries.get(&class.key()).and_then(|ops| ops.get(&tag))
    }

    /// Resolves the overload for `tag` starting at `start`, walking the
    /// parent chain with engine entries preferred over class-declared
    /// operators at each step.
    #[must_use]
    pub fn resolve(&self, start: &Class, tag: OpTag) -> Option<NativeFunction> {
        let mut current = Some(start.clone());

        while let Some(class) = current {
            if let Some(func) = self.get(&class, tag) {
                return Some(func.clone());
            }
            if let Some(func) = class.declared(tag) {
                return Some(func);
            }
            current = class.parent();
        }

        None
    }
}

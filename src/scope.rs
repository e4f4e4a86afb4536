//! Lexical scope stack shared by the resolver and the binder.
//!
//! Both passes push and pop scopes at the same syntactic points, so a
//! distance recorded by the resolver addresses the same scope when the binder
//! looks the name up again.

use std::collections::HashMap;

/// A stack of scopes, innermost last. The bottom scope is the global scope
/// and is never popped.
#[derive(Debug, Clone)]
pub struct ScopeStack<T> {
    scopes: Vec<HashMap<String, T>>,
}

impl<T> Default for ScopeStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ScopeStack<T> {
    pub fn new() -> Self {
        ScopeStack {
            scopes: vec![HashMap::new()],
        }
    }

    pub fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
        tracing::trace!(depth = self.scopes.len(), "begin scope");
    }

    pub fn end_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
        tracing::trace!(depth = self.scopes.len(), "end scope");
    }

    /// Number of scopes, the global scope included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Inserts into the innermost scope, replacing any previous entry there.
    pub fn insert(&mut self, name: &str, value: T) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    /// Inserts into the global scope.
    pub fn insert_global(&mut self, name: &str, value: T) {
        self.scopes[0].insert(name.to_string(), value);
    }

    pub fn contains_in_current(&self, name: &str) -> bool {
        self.scopes
            .last()
            .is_some_and(|scope| scope.contains_key(name))
    }

    pub fn get_in_current_mut(&mut self, name: &str) -> Option<&mut T> {
        self.scopes.last_mut().and_then(|scope| scope.get_mut(name))
    }

    /// Searches innermost to outermost. Returns the entry and how many scopes
    /// out it was found, 0 being the innermost.
    pub fn lookup(&self, name: &str) -> Option<(usize, &T)> {
        self.scopes
            .iter()
            .rev()
            .enumerate()
            .find_map(|(distance, scope)| scope.get(name).map(|value| (distance, value)))
    }

    /// Looks `name` up exactly `distance` scopes out.
    pub fn lookup_at(&self, distance: usize, name: &str) -> Option<&T> {
        let index = self.scopes.len().checked_sub(distance + 1)?;
        self.scopes[index].get(name)
    }

    /// Drops every scope above the global one.
    pub fn truncate(&mut self) {
        self.scopes.truncate(1);
    }
}

impl<T: Clone> ScopeStack<T> {
    /// A copy of the global scope, to restore after a failed unit.
    pub fn snapshot(&self) -> HashMap<String, T> {
        self.scopes[0].clone()
    }

    /// Resets to a single global scope holding `globals`.
    pub fn restore(&mut self, globals: HashMap<String, T>) {
        self.scopes = vec![globals];
    }
}

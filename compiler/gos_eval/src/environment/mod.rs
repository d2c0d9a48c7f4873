//! Lexical environments.
//!
//! An environment is a chain of scopes. Each scope owns its bindings and
//! holds a shared reference to its parent; nothing points from a parent to
//! its children. A fresh child scope is created for every function call,
//! with the function's captured environment as parent.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::value::Value;

/// Single-threaded shared ownership with interior mutability.
///
/// Wraps `Rc<RefCell<T>>` so every scope allocation goes through
/// [`LocalScope::new`] and the type states plainly that scopes never cross
/// threads.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One scope: its own bindings plus the enclosing scope.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope, replacing any earlier binding here.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look `name` up here, then outward through the parents.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        let mut next = self.parent.clone();
        while let Some(scope) = next {
            let scope = scope.borrow();
            if let Some(value) = scope.bindings.get(name) {
                return Some(value.clone());
            }
            next = scope.parent.clone();
        }
        None
    }
}

/// Handle to the innermost scope of an environment chain.
///
/// Cloning the handle shares the scope; closures hold such a clone.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A new root (global) environment.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::new()),
        }
    }

    /// A new environment whose parent is `parent`.
    pub fn enclosed(parent: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(parent.scope.clone())),
        }
    }

    /// Bind `name` in the innermost scope. Enclosing scopes are never
    /// written through this handle.
    #[inline]
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.scope.borrow_mut().define(name, value);
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.scope.borrow().lookup(name)
    }

    /// Sorted names bound in the innermost scope.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.scope.borrow().bindings.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("locals", &self.local_names())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;

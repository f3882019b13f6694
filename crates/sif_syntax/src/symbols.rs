//! Symbol table and scope management for sif
//!
//! Tracks declared functions and variables in a stack of lexical scopes. Level `0` is the global
//! scope and is never popped.

use std::collections::HashMap;

use thiserror::Error;

use crate::lexer::Token;

/// What a symbol names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Fn { param_count: usize },
    Var,
}

/// A declaration snapshot: name, kind, where it was declared and whether it has a value yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub line: usize,
    pub column: usize,
    /// Scope level the symbol was stored at. Set by [`SymbolTable::store`].
    pub level: usize,
    pub assigned: bool,
}

impl Symbol {
    fn from_token(token: &Token, kind: SymbolKind, assigned: bool) -> Self {
        Self {
            name: token.name().to_string(),
            kind,
            line: token.line(),
            column: token.column(),
            level: 0,
            assigned,
        }
    }

    pub fn function(name: &Token, param_count: usize) -> Self {
        Self::from_token(name, SymbolKind::Fn { param_count }, true)
    }

    /// A `var` declaration; `assigned` is `true` when it has an initializer.
    pub fn variable(name: &Token, assigned: bool) -> Self {
        Self::from_token(name, SymbolKind::Var, assigned)
    }

    /// A function parameter or loop variable, bound on entry to its block.
    pub fn binding(name: &Token) -> Self {
        Self::from_token(name, SymbolKind::Var, true)
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, SymbolKind::Fn { .. })
    }

    pub fn param_count(&self) -> Option<usize> {
        match self.kind {
            SymbolKind::Fn { param_count } => Some(param_count),
            SymbolKind::Var => None,
        }
    }
}

/// A single lexical scope.
pub type Scope = HashMap<String, Symbol>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("the global scope cannot be closed")]
    GlobalScope,
}

/// Stack of scopes, innermost last.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// A table holding just the empty global scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new()],
        }
    }

    /// Push a new innermost scope and return its level.
    pub fn init_scope(&mut self) -> usize {
        self.scopes.push(Scope::new());
        let level = self.level();
        tracing::debug!(level, "scope opened");
        level
    }

    /// Pop the innermost scope and return it.
    pub fn close_scope(&mut self) -> Result<Scope, SymbolError> {
        if self.is_global() {
            return Err(SymbolError::GlobalScope);
        }
        let level = self.level();
        let scope = self.scopes.pop().ok_or(SymbolError::GlobalScope)?;
        tracing::debug!(level, symbols = scope.len(), "scope closed");
        Ok(scope)
    }

    /// Depth of the innermost scope; `0` is global.
    pub fn level(&self) -> usize {
        self.scopes.len() - 1
    }

    pub fn is_global(&self) -> bool {
        self.level() == 0
    }

    /// Return `true` if `name` is visible from the innermost scope.
    pub fn contains(&self, name: &str) -> bool {
        self.retrieve(name).is_some()
    }

    /// Store `symbol` in the innermost scope, replacing any same-named symbol there.
    ///
    /// Returns the replaced symbol, if the name was already declared in that scope.
    pub fn store(&mut self, mut symbol: Symbol) -> Option<Symbol> {
        symbol.level = self.level();
        tracing::trace!(name = %symbol.name, level = symbol.level, "symbol stored");
        let previous = self.scopes.last_mut()?.insert(symbol.name.clone(), symbol);
        if let Some(previous) = &previous {
            tracing::debug!(
                name = %previous.name,
                line = previous.line,
                column = previous.column,
                "redeclared in the same scope"
            );
        }
        previous
    }

    /// Find the innermost visible symbol named `name`.
    pub fn retrieve(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Mark the innermost visible `name` as assigned. Returns `false` if it is not visible.
    pub fn mark_assigned(&mut self, name: &str) -> bool {
        match self.scopes.iter_mut().rev().find_map(|scope| scope.get_mut(name)) {
            Some(symbol) => {
                symbol.assigned = true;
                true
            }
            None => false,
        }
    }
}

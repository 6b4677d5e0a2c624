//! Lexical scopes and the per-name binding state they track.

use lox_ast::Token;
use rustc_hash::FxHashMap;

/// What the resolver knows about one declared name in one scope.
///
/// Being declared is implied by being present in a [`Scope`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The declaring occurrence, used to position diagnostics.
    pub token: Token,
    /// The binding holds a value that may be read.
    pub defined: bool,
    /// The binding has been read or written. Never reset once set.
    pub used: bool,
}

impl Binding {
    fn new(token: Token) -> Self {
        Binding {
            token,
            defined: false,
            used: false,
        }
    }
}

/// Names declared in one lexical construct (block, function body, loop).
#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Binding>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undefined, unused binding for `token`.
    ///
    /// Returns `false` and leaves the existing binding untouched when the name
    /// is already declared here.
    pub fn declare(&mut self, token: &Token) -> bool {
        debug_assert!(!token.is_blank(), "the blank identifier is never declared");
        if self.bindings.contains_key(&token.lexeme) {
            return false;
        }
        self.bindings
            .insert(token.lexeme.clone(), Binding::new(token.clone()));
        true
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Binding> {
        self.bindings.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Declaring tokens of the bindings that were never read or written.
    pub fn unused(&self) -> impl Iterator<Item = &Token> {
        self.bindings
            .values()
            .filter(|binding| !binding.used)
            .map(|binding| &binding.token)
    }
}

/// The tracked scopes, innermost last.
///
/// Index 0 is the outermost *tracked* scope; the program's global scope is
/// never pushed.
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self) {
        self.scopes.push(Scope::new());
    }

    pub fn pop(&mut self) -> Option<Scope> {
        self.scopes.pop()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn clear(&mut self) {
        self.scopes.clear();
    }

    /// The scope new declarations go into, or `None` at global level.
    pub fn innermost_mut(&mut self) -> Option<&mut Scope> {
        self.scopes.last_mut()
    }

    /// Find the nearest binding for `name`, searching innermost to outermost.
    ///
    /// Returns the distance to the scope holding it (0 for the innermost
    /// scope) together with the binding.
    pub fn find_mut(&mut self, name: &str) -> Option<(usize, &mut Binding)> {
        self.scopes
            .iter_mut()
            .rev()
            .enumerate()
            .find_map(|(distance, scope)| scope.get_mut(name).map(|binding| (distance, binding)))
    }
}

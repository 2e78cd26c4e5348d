//! String interning for identifiers

pub use lasso::Spur as Symbol;
use lasso::ThreadedRodeo;
use std::sync::Arc;

/// Thread-safe string interner
///
/// Cloning is cheap; every clone shares the same table, so one interner can
/// serve several files lowered on different threads.
#[derive(Clone, Default)]
pub struct Interner {
    inner: Arc<ThreadedRodeo>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&self, text: &str) -> Symbol {
        self.inner.get_or_intern(text)
    }

    pub fn resolve(&self, sym: &Symbol) -> &str {
        self.inner.resolve(sym)
    }

    pub fn try_resolve(&self, sym: &Symbol) -> Option<&str> {
        self.inner.try_resolve(sym)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl std::fmt::Debug for Interner {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Interner")
            .field("len", &self.len())
            .finish()
    }
}

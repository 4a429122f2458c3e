//! String interning for identifier names.
//!
//! Identifier text is interned once per factory so that names compare as
//! integers and the identifier cache can be keyed by a `u32`-sized handle.

use lasso::{Spur, ThreadedRodeo};
use std::fmt;

/// A handle to an interned string. Comparing two symbols is an integer
/// comparison; equal symbols always came from equal text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Symbol(Spur);

impl Symbol {
    #[inline]
    pub fn from_spur(spur: Spur) -> Self {
        Self(spur)
    }

    #[inline]
    pub fn as_spur(self) -> Spur {
        self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.0)
    }
}

/// Append-only string interner.
///
/// Entries are added and never removed, so a symbol stays valid for the
/// lifetime of the interner.
pub struct StringInterner {
    rodeo: ThreadedRodeo,
}

impl StringInterner {
    pub fn new() -> Self {
        Self {
            rodeo: ThreadedRodeo::new(),
        }
    }

    /// Intern `s`, returning the existing symbol if it was seen before.
    #[inline]
    pub fn intern(&self, s: &str) -> Symbol {
        Symbol::from_spur(self.rodeo.get_or_intern(s))
    }

    /// Look up a symbol without interning.
    #[inline]
    pub fn get(&self, s: &str) -> Option<Symbol> {
        self.rodeo.get(s).map(Symbol::from_spur)
    }

    #[inline]
    pub fn resolve(&self, symbol: Symbol) -> &str {
        self.rodeo.resolve(&symbol.as_spur())
    }

    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}

//! String interner for identifiers and defined-operator names.
//!
//! One interner lives inside each [`AstContext`](crate::AstContext). The
//! tree is built and walked on a single thread, so the interner needs no
//! locking; independent compilations own independent interners.

use rustc_hash::FxHashMap;

use crate::Name;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// More than `u32::MAX` distinct strings.
    #[error("interner exceeded capacity: {count} strings, max is {max}", max = u32::MAX)]
    Overflow { count: usize },
}

/// Interner mapping strings to compact [`Name`] handles.
#[derive(Clone)]
pub struct StringInterner {
    /// Map from string content to its index in `strings`.
    map: FxHashMap<Box<str>, u32>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned as [`Name::EMPTY`].
    pub fn new() -> Self {
        let mut interner = StringInterner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        interner.map.insert(Box::from(""), 0);
        interner.strings.push(Box::from(""));
        interner
    }

    /// Try to intern a string, returning its `Name` or an error on overflow.
    pub fn try_intern(&mut self, s: &str) -> Result<Name, InternError> {
        if let Some(&index) = self.map.get(s) {
            return Ok(Name::from_raw(index));
        }
        let count = self.strings.len();
        let index = u32::try_from(count).map_err(|_| InternError::Overflow { count })?;
        self.map.insert(Box::from(s), index);
        self.strings.push(Box::from(s));
        Ok(Name::from_raw(index))
    }

    /// Intern a string.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    pub fn intern(&mut self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the string for a `Name`.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner.
    #[track_caller]
    pub fn lookup(&self, name: Name) -> &str {
        &self.strings[name.index()]
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.strings.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_dedup() {
        let mut interner = StringInterner::new();
        let a = interner.intern("alpha");
        let b = interner.intern("alpha");
        let c = interner.intern("beta");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(interner.lookup(a), "alpha");
        assert_eq!(interner.lookup(c), "beta");
        assert_eq!(interner.len(), 3);
    }

    #[test]
    fn test_empty_is_pre_interned() {
        let mut interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
        assert!(!interner.is_empty());
    }

    #[test]
    fn test_try_intern_ok() {
        let mut interner = StringInterner::default();
        let Ok(name) = interner.try_intern(".MYOP.") else {
            panic!("interning a short string must succeed");
        };
        assert_eq!(interner.lookup(name), ".MYOP.");
    }
}

use std::fmt::Write;

use crate::{interpreter::value::Number, util::num::FormatOptions};

/// A named value in the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol<N> {
    /// The identifier the value is bound to.
    pub name:  String,
    /// The bound value.
    pub value: N,
}

/// Insertion-ordered mapping from identifier names to values.
///
/// Names are unique: assigning to an existing name overwrites its value in
/// place, assigning to a new name appends. Tables stay small, so lookups are
/// a linear scan. Symbols are never removed.
///
/// # Example
/// ```
/// use llcalc::interpreter::symbols::SymbolTable;
///
/// let mut table = SymbolTable::<f64>::with_constants();
/// table.assign_or_insert("x", 1.0);
/// table.assign_or_insert("x", 2.0);
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.find("x").map(|s| s.value), Some(2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable<N> {
    symbols: Vec<Symbol<N>>,
}

impl<N: Number> Default for SymbolTable<N> {
    fn default() -> Self {
        Self::with_constants()
    }
}

impl<N: Number> SymbolTable<N> {
    /// Creates a table holding no symbols at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self { symbols: Vec::new() }
    }

    /// Creates a table seeded with the built-in constant `pi`.
    ///
    /// The constant is an ordinary entry and may be overwritten.
    #[must_use]
    pub fn with_constants() -> Self {
        let mut table = Self::empty();
        table.assign_or_insert("pi", N::from_f64(std::f64::consts::PI));
        table
    }

    /// Looks up a symbol by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Symbol<N>> {
        self.symbols.iter().find(|sym| sym.name == name)
    }

    /// Binds `value` to `name`, overwriting an existing binding or appending a
    /// new one, and returns the bound symbol.
    pub fn assign_or_insert(&mut self, name: &str, value: N) -> &Symbol<N> {
        let index = match self.symbols.iter().position(|sym| sym.name == name) {
            Some(index) => {
                tracing::debug!(name, %value, "overwriting symbol");
                self.symbols[index].value = value;
                index
            },
            None => {
                tracing::debug!(name, %value, "inserting symbol");
                self.symbols.push(Symbol { name: name.to_string(),
                                           value });
                self.symbols.len() - 1
            },
        };
        &self.symbols[index]
    }

    /// Iterates over the symbols in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol<N>> {
        self.symbols.iter()
    }

    /// Number of symbols in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the table holds no symbols.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Lists every symbol as `name = value`, one per line, in insertion order.
    ///
    /// Values are rendered with the same options as evaluation results.
    ///
    /// # Example
    /// ```
    /// use llcalc::{interpreter::symbols::SymbolTable, util::num::FormatOptions};
    ///
    /// let mut table = SymbolTable::<f64>::with_constants();
    /// table.assign_or_insert("x", 14.0);
    ///
    /// assert_eq!(table.format_all(&FormatOptions::default()),
    ///            "pi = 3.14159265\nx = 14\n");
    /// ```
    #[must_use]
    pub fn format_all(&self, options: &FormatOptions) -> String {
        self.symbols.iter().fold(String::new(), |mut out, sym| {
                               let _ = writeln!(out, "{} = {}", sym.name, sym.value.format(options));
                               out
                           })
    }
}

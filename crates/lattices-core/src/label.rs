//! Human-readable labels for (nested) sets
//!
//! A set of atoms renders as its atoms concatenated in sorted order:
//! `{0, 1}` → `01`. A set of sets renders each child with the remaining
//! separators, orders the children by descending length and then
//! lexicographically, and joins them with the current separator:
//! `{{0, 1}, {1, 2}}` → `01•12`. The empty set renders as the empty symbol.

use crate::config::LatticeConfig;
use std::collections::BTreeSet;

/// Something that can be rendered with per-level separators
pub trait Label {
    /// True when values of this type are themselves sets, which makes a set
    /// of them a nesting level that consumes a separator.
    const NESTED: bool = false;

    /// Render with the separators for this level and below
    fn render(&self, symbols: &[String], empty_symbol: &str) -> String;
}

macro_rules! atom_label {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Label for $ty {
                fn render(&self, _symbols: &[String], _empty_symbol: &str) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

atom_label!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, char, String);

impl Label for &str {
    fn render(&self, _symbols: &[String], _empty_symbol: &str) -> String {
        (*self).to_string()
    }
}

impl<L: Label> Label for BTreeSet<L> {
    const NESTED: bool = true;

    fn render(&self, symbols: &[String], empty_symbol: &str) -> String {
        let rendered = if L::NESTED {
            let (separator, rest) = match symbols.split_first() {
                Some((separator, rest)) => (separator.as_str(), rest),
                None => ("", symbols),
            };
            let mut children: Vec<String> = self
                .iter()
                .map(|child| child.render(rest, empty_symbol))
                .collect();
            children.sort_by(|a, b| {
                b.chars()
                    .count()
                    .cmp(&a.chars().count())
                    .then_with(|| a.cmp(b))
            });
            children.join(separator)
        } else {
            self.iter()
                .map(|atom| atom.render(symbols, empty_symbol))
                .collect()
        };

        if rendered.is_empty() {
            empty_symbol.to_string()
        } else {
            rendered
        }
    }
}

/// Render `value` with the separators and empty symbol from `config`
pub fn stringify<L: Label>(value: &L, config: &LatticeConfig) -> String {
    value.render(&config.symbols, &config.empty_symbol)
}

//! Reference designators for keys.

use std::collections::HashSet;

/// Hands out unique key names for one compilation.
///
/// Single letters become `K_<LETTER>`, single digits `K_N<digit>`.
/// Everything else, including a letter or digit that was already used,
/// falls back to an ordinal `K<n>` starting at 1.
#[derive(Debug, Clone)]
pub struct DesignatorAssigner {
    next_ordinal: usize,
    used: HashSet<String>,
}

impl DesignatorAssigner {
    pub fn new() -> Self {
        Self {
            next_ordinal: 1,
            used: HashSet::new(),
        }
    }

    pub fn assign(&mut self, label: &str) -> String {
        if let Some(name) = legend_designator(label) {
            if self.used.insert(name.clone()) {
                return name;
            }
            log::debug!("Designator {} already taken, using ordinal", name);
        }
        self.next_fallback()
    }

    /// Number of ordinal names handed out so far.
    pub fn ordinals_used(&self) -> usize {
        self.next_ordinal - 1
    }

    fn next_fallback(&mut self) -> String {
        loop {
            let name = format!("K{}", self.next_ordinal);
            self.next_ordinal += 1;
            if self.used.insert(name.clone()) {
                return name;
            }
        }
    }
}

impl Default for DesignatorAssigner {
    fn default() -> Self {
        Self::new()
    }
}

/// Name derived from the last legend line, if it is a single letter or digit.
fn legend_designator(label: &str) -> Option<String> {
    let last = label.split('\n').last()?;
    let mut chars = last.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    if ch.is_ascii_alphabetic() {
        Some(format!("K_{}", ch.to_ascii_uppercase()))
    } else if ch.is_ascii_digit() {
        Some(format!("K_N{}", ch))
    } else {
        None
    }
}

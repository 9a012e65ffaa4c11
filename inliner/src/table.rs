//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the autoinliner project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::collections::HashMap;
use std::fmt;

/// A macro name bound to its literal replacement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroDefinition {
    pub name: String,
    pub replacement: String,
}

impl fmt::Display for MacroDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {:?}", self.name, self.replacement)
    }
}

/// Macro definitions keyed by name.
///
/// Entries are kept in the order their names were first defined. A later
/// definition of the same name replaces the text but keeps the original slot,
/// so iteration order is stable for a given input.
#[derive(Debug, Clone, Default)]
pub struct MacroTable {
    entries: Vec<MacroDefinition>,
    index: HashMap<String, usize>,
}

impl MacroTable {
    pub fn new() -> MacroTable {
        MacroTable::default()
    }

    /// Insert or overwrite a definition, returning the replacement text it
    /// displaced.
    pub fn insert(&mut self, definition: MacroDefinition) -> Option<String> {
        match self.index.get(&definition.name) {
            Some(&slot) => Some(std::mem::replace(
                &mut self.entries[slot].replacement,
                definition.replacement,
            )),
            None => {
                self.index
                    .insert(definition.name.clone(), self.entries.len());
                self.entries.push(definition);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&slot| self.entries[slot].replacement.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Definitions in first-definition order.
    pub fn iter(&self) -> std::slice::Iter<'_, MacroDefinition> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a MacroTable {
    type Item = &'a MacroDefinition;
    type IntoIter = std::slice::Iter<'a, MacroDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Into<String>, R: Into<String>> FromIterator<(N, R)> for MacroTable {
    fn from_iter<I: IntoIterator<Item = (N, R)>>(iter: I) -> Self {
        let mut table = MacroTable::new();
        for (name, replacement) in iter {
            table.insert(MacroDefinition {
                name: name.into(),
                replacement: replacement.into(),
            });
        }
        table
    }
}

//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the autoinliner project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use once_cell::sync::Lazy;
use regex::Regex;

use crate::table::{MacroDefinition, MacroTable};

/// `#define NAME[(params)] replacement`, anywhere in the text.
///
/// The whitespace runs never cross a line break and the replacement stops
/// before `\r` or `\n`, so it holds at least one character of the same line.
/// A parameter list directly after the name is skipped, not bound.
static DEFINITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#define[^\S\r\n]+(\w+)(?:\([^()\r\n]*\))?[^\S\r\n]+([^\r\n]+)")
        .expect("definition pattern is valid")
});

/// Scan the whole text for macro definitions.
///
/// Matching is purely textual: definitions inside comments, string literals
/// or after other text on the same line all count. When a name is defined
/// more than once the last definition wins.
pub fn collect(source: &str) -> MacroTable {
    let mut table = MacroTable::new();

    for captures in DEFINITION.captures_iter(source) {
        let definition = MacroDefinition {
            name: captures[1].to_string(),
            replacement: captures[2].to_string(),
        };
        log::debug!("collect(): found definition {definition}");

        let name = definition.name.clone();
        if let Some(previous) = table.insert(definition) {
            log::debug!(
                "collect(): {name} redefined, replacing {previous:?} with {:?}",
                table.get(&name).unwrap_or_default()
            );
        }
    }

    log::debug!("collect(): {} macro(s) defined", table.len());
    table
}

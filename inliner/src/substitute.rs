//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the autoinliner project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use regex::{NoExpand, Regex};
use std::borrow::Cow;

use crate::table::{MacroDefinition, MacroTable};

/// A macro name that was inlined somewhere on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionEvent {
    /// 1-based.
    pub line: usize,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    pub output: String,
    pub events: Vec<SubstitutionEvent>,
}

/// Whole-word usage pattern of one macro.
struct Usage<'a> {
    definition: &'a MacroDefinition,
    pattern: Regex,
}

fn compile_usages(table: &MacroTable) -> Vec<Usage<'_>> {
    let mut usages = Vec::with_capacity(table.len());
    for definition in table {
        let source = format!(r"\b{}\b", regex::escape(&definition.name));
        match Regex::new(&source) {
            Ok(pattern) => usages.push(Usage {
                definition,
                pattern,
            }),
            Err(e) => log::warn!("Skipping macro {}: {e}", definition.name),
        }
    }
    usages
}

/// Replace every whole-word macro usage, line by line.
///
/// Macros are applied to each line in table order, each one to the result of
/// the previous. A replacement that spells a macro defined later in the table
/// is therefore expanded again on the same line, while one that spells an
/// earlier macro is left alone. Lines are rejoined with `\n` and every line,
/// the last included, is terminated.
pub fn substitute(source: &str, table: &MacroTable) -> Substitution {
    let usages = compile_usages(table);
    let mut result = Substitution {
        output: String::with_capacity(source.len()),
        events: Vec::new(),
    };

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let mut line = Cow::Borrowed(line);

        for usage in &usages {
            if !usage.pattern.is_match(&line) {
                continue;
            }

            let replaced = usage
                .pattern
                .replace_all(&line, NoExpand(&usage.definition.replacement))
                .into_owned();
            line = Cow::Owned(replaced);

            log::trace!("substitute(): line {line_no}: inlined {}", usage.definition.name);
            result.events.push(SubstitutionEvent {
                line: line_no,
                name: usage.definition.name.clone(),
            });
        }

        result.output.push_str(&line);
        result.output.push('\n');
    }

    result
}

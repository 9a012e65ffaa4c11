//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the autoinliner project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Textual inlining of `#define` macros.
//!
//! The work happens in two passes over the source text. [`collect`] gathers
//! every definition into a [`MacroTable`], then [`substitute`] rewrites each
//! line, replacing whole-word usages of the collected names. There is no
//! tokenizer: comments, string literals and the definitions themselves are
//! rewritten like any other text, and function-like macros are replaced by
//! their body without binding arguments.

use gettextrs::gettext;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub mod collect;
pub mod error;
pub mod pipeline;
pub mod substitute;
pub mod table;

pub use collect::collect;
pub use error::{Error, Result};
pub use substitute::{substitute, Substitution, SubstitutionEvent};
pub use table::{MacroDefinition, MacroTable};

use pipeline::{Overwrite, WriteOutcome};

/// autoinliner - inline object-like macro definitions
#[derive(Debug, clap::Parser, Clone)]
#[command(version, about)]
pub struct Args {
    /// Overwrite an existing output file without asking.
    #[arg(short, long)]
    pub force: bool,

    /// Do not report the lines where macros were inlined.
    #[arg(short, long)]
    pub quiet: bool,

    /// Absolute path of the source file. The result is written next to it
    /// with an `.inlined` suffix.
    pub file: PathBuf,
}

/// Result of inlining one source text.
#[derive(Debug, Clone)]
pub struct Inlined {
    pub table: MacroTable,
    pub output: String,
    pub events: Vec<SubstitutionEvent>,
}

/// Collect the definitions of `source`, then inline them everywhere.
pub fn inline_macros(source: &str) -> Inlined {
    let table = collect(source);
    let Substitution { output, events } = substitute(source, &table);
    Inlined {
        table,
        output,
        events,
    }
}

/// Inline the file named by `args`, reporting progress on `stdout` and
/// reading overwrite confirmations from `stdin`.
pub fn run<R: BufRead, W: Write>(args: &Args, stdin: &mut R, stdout: &mut W) -> Result<()> {
    let source = pipeline::read_source(&args.file)?;
    let inlined = inline_macros(&source);

    if !args.quiet {
        for event in &inlined.events {
            writeln!(
                stdout,
                "{}: {} {}",
                event.name,
                gettext("inlined at line"),
                event.line
            )?;
        }
    }

    let target = pipeline::output_path(&args.file);
    let overwrite = if args.force {
        Overwrite::Force
    } else {
        Overwrite::Prompt
    };

    match pipeline::write_output(&target, &inlined.output, overwrite, stdin, stdout)? {
        WriteOutcome::Written => writeln!(
            stdout,
            "{} {}",
            gettext("Inlined file written to"),
            target.display()
        )?,
        WriteOutcome::Declined => writeln!(stdout, "{}", gettext("File not overwritten."))?,
    }

    Ok(())
}

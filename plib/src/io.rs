//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the autoinliner project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io::{self, BufRead, Write};

/// Ask a yes/no question and read the answer from `input`.
///
/// Only the exact answer `yes` (ignoring surrounding whitespace) counts as
/// confirmation. End of input is treated as a refusal.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<bool> {
    write!(output, "{} (yes/no): ", question)?;
    output.flush()?;

    let mut answer = String::new();
    let n_read = input.read_line(&mut answer)?;
    if n_read == 0 {
        // no trailing newline was written by the user
        writeln!(output)?;
        return Ok(false);
    }

    Ok(answer.trim() == "yes")
}

//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the autoinliner project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::PROJECT_NAME;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let args = autoinliner::Args::parse();

    setlocale(LocaleCategory::LcAll, "");
    if let Err(e) = textdomain(PROJECT_NAME)
        .and_then(|_| bind_textdomain_codeset(PROJECT_NAME, "UTF-8"))
    {
        eprintln!("{}: {}", gettext("Error"), e);
        return ExitCode::from(1);
    }

    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();

    match autoinliner::run(&args, &mut stdin, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", gettext("Error"), e);
            ExitCode::from(1)
        }
    }
}

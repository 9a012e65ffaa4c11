//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the autoinliner project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::path::PathBuf;

/// Failures at the file boundary. Inlining itself never fails.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Path must be absolute: {}", .0.display())]
    PathNotAbsolute(PathBuf),
    #[error("File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Could not open file: {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Terminal read/write errors
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

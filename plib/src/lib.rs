//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the autoinliner project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

pub mod io;
pub mod testing;

pub const PROJECT_NAME: &'static str = "autoinliner";

pub use testing::*;

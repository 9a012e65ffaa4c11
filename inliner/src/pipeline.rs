//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the autoinliner project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use gettextrs::gettext;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Appended to the full input file name to form the output path.
pub const OUTPUT_SUFFIX: &str = ".inlined";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Replace an existing output file silently.
    Force,
    /// Ask before replacing an existing output file.
    Prompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Declined,
}

/// Read the source text of an absolute, existing file.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.is_absolute() {
        return Err(Error::PathNotAbsolute(path.to_path_buf()));
    }
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read_source(): read {} bytes from {}", bytes.len(), path.display());

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn output_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Write `contents` to `path`, asking on `input`/`output` first when the file
/// already exists and `overwrite` is [`Overwrite::Prompt`].
pub fn write_output<R: BufRead, W: Write>(
    path: &Path,
    contents: &str,
    overwrite: Overwrite,
    input: &mut R,
    output: &mut W,
) -> Result<WriteOutcome> {
    if overwrite == Overwrite::Prompt && path.exists() {
        let question = format!(
            "{} {} {}",
            gettext("File"),
            path.display(),
            gettext("already exists. Do you want to overwrite it?")
        );
        if !plib::io::confirm(input, output, &question)? {
            log::debug!("write_output(): overwrite of {} declined", path.display());
            return Ok(WriteOutcome::Declined);
        }
    }

    fs::write(path, contents).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("write_output(): wrote {} bytes to {}", contents.len(), path.display());

    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::{output_path, read_source, write_output, Overwrite, WriteOutcome};
    use crate::error::Error;
    use std::fs;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_output_path_appends_suffix() {
        assert_eq!(
            output_path(Path::new("/src/main.c")),
            PathBuf::from("/src/main.c.inlined")
        );
        assert_eq!(
            output_path(Path::new("/src/Makefile")),
            PathBuf::from("/src/Makefile.inlined")
        );
    }

    #[test]
    fn test_read_source_relative() {
        let err = read_source(Path::new("relative/file.c")).unwrap_err();
        assert!(matches!(err, Error::PathNotAbsolute(_)));
        assert_eq!(err.to_string(), "Path must be absolute: relative/file.c");
    }

    #[test]
    fn test_read_source_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.c");
        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
        assert_eq!(
            err.to_string(),
            format!("File does not exist: {}", path.display())
        );
    }

    #[test]
    fn test_read_source_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(dir.path()).unwrap_err();
        assert!(matches!(err, Error::FileOpen { .. }));
    }

    #[test]
    fn test_read_source_lossy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bytes.c");
        fs::write(&path, b"#define A 1\n\xff\xfe A\n").unwrap();
        assert_eq!(read_source(&path).unwrap(), "#define A 1\n\u{fffd}\u{fffd} A\n");
    }

    #[test]
    fn test_write_output_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.c.inlined");
        let mut input = Cursor::new(Vec::new());
        let mut prompt = Vec::new();

        let outcome =
            write_output(&path, "x = 1;\n", Overwrite::Prompt, &mut input, &mut prompt).unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        assert!(prompt.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "x = 1;\n");
    }

    #[test]
    fn test_write_output_declined() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.c.inlined");
        fs::write(&path, "old\n").unwrap();
        let mut input = Cursor::new(b"no\n".to_vec());
        let mut prompt = Vec::new();

        let outcome =
            write_output(&path, "new\n", Overwrite::Prompt, &mut input, &mut prompt).unwrap();
        assert_eq!(outcome, WriteOutcome::Declined);
        assert_eq!(fs::read_to_string(&path).unwrap(), "old\n");
        assert_eq!(
            String::from_utf8(prompt).unwrap(),
            format!(
                "File {} already exists. Do you want to overwrite it? (yes/no): ",
                path.display()
            )
        );
    }

    #[test]
    fn test_write_output_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.c.inlined");
        fs::write(&path, "old\n").unwrap();
        let mut input = Cursor::new(b"yes\n".to_vec());
        let mut prompt = Vec::new();

        let outcome =
            write_output(&path, "new\n", Overwrite::Prompt, &mut input, &mut prompt).unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_write_output_forced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.c.inlined");
        fs::write(&path, "old\n").unwrap();
        let mut input = Cursor::new(Vec::new());
        let mut prompt = Vec::new();

        let outcome =
            write_output(&path, "new\n", Overwrite::Force, &mut input, &mut prompt).unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        assert!(prompt.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_write_output_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.c.inlined");
        let mut input = Cursor::new(Vec::new());
        let mut prompt = Vec::new();

        let err = write_output(&path, "x\n", Overwrite::Prompt, &mut input, &mut prompt)
            .unwrap_err();
        assert!(matches!(err, Error::FileOpen { .. }));
    }
}

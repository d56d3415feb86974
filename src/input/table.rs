use std::path::{Path, PathBuf};

use crate::input::{InputError, read_to_string_maybe_gz};

/// Whole-file contents of one SysTable, kept as ordered lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableText {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl TableText {
    pub fn read(path: &Path) -> Result<Self, InputError> {
        let raw = read_to_string_maybe_gz(path)?;
        Ok(Self::from_text(path, &raw))
    }

    pub fn from_text(path: &Path, raw: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: raw.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

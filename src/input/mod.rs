use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

pub mod table;

pub use table::TableText;

const TABLE_EXTENSIONS: &[&str] = &[".tex", ".tex.gz"];

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no table for '{token}' in {}", .dir.display())]
    NoTable { token: String, dir: PathBuf },
    #[error("ambiguous table for '{token}' in {}: {}", .dir.display(), .candidates.join(", "))]
    AmbiguousTable {
        token: String,
        dir: PathBuf,
        candidates: Vec<String>,
    },
}

impl InputError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub fn is_table_file(name: &str) -> bool {
    TABLE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Returns the single table in `dir` whose file name contains `token`.
pub fn locate_table(dir: &Path, token: &str) -> Result<PathBuf, InputError> {
    let entries = std::fs::read_dir(dir).map_err(|e| InputError::io(dir, e))?;
    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| InputError::io(dir, e))?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.contains(token) && is_table_file(&name) {
            candidates.push(name);
        }
    }
    candidates.sort();

    match candidates.len() {
        0 => Err(InputError::NoTable {
            token: token.to_string(),
            dir: dir.to_path_buf(),
        }),
        1 => Ok(dir.join(&candidates[0])),
        _ => Err(InputError::AmbiguousTable {
            token: token.to_string(),
            dir: dir.to_path_buf(),
            candidates,
        }),
    }
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = std::fs::File::open(path).map_err(|e| InputError::io(path, e))?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn read_to_string_maybe_gz(path: &Path) -> Result<String, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|e| InputError::io(path, e))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;

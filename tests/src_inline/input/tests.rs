use std::fs;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use super::{InputError, TableText, is_table_file, locate_table};

fn touch(dir: &std::path::Path, name: &str) {
    fs::write(dir.join(name), "x & y \\\\\n").unwrap();
}

#[test]
fn test_is_table_file() {
    assert!(is_table_file("SysTable_sfSuper1a.tex"));
    assert!(is_table_file("SysTable_sfSuper1a.tex.gz"));
    assert!(!is_table_file("SysTable_sfSuper1a.txt"));
    assert!(!is_table_file("SysTable_sfSuper1a.tex.bak"));
}

#[test]
fn test_locate_unique_table() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "SysTable_sfSuper1a.tex");
    touch(dir.path(), "SysTable_emSuper1a.tex");
    touch(dir.path(), "sfSuper1a_notes.txt");

    let found = locate_table(dir.path(), "sfSuper1a").unwrap();
    assert_eq!(found, dir.path().join("SysTable_sfSuper1a.tex"));
}

#[test]
fn test_locate_missing_table() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "SysTable_emSuper1a.tex");
    let err = locate_table(dir.path(), "sfSuper1a").unwrap_err();
    assert!(matches!(err, InputError::NoTable { ref token, .. } if token == "sfSuper1a"));
}

#[test]
fn test_locate_ambiguous_table() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "SysTable_sfSuper1a.tex");
    touch(dir.path(), "SysTable_sfSuper1a_v2.tex");
    let err = locate_table(dir.path(), "sfSuper1a").unwrap_err();
    match err {
        InputError::AmbiguousTable { candidates, .. } => {
            assert_eq!(
                candidates,
                vec!["SysTable_sfSuper1a.tex", "SysTable_sfSuper1a_v2.tex"]
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_locate_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let err = locate_table(&dir.path().join("absent"), "sfSuper1a").unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
}

#[test]
fn test_read_plain_and_gz_tables() {
    let dir = tempfile::tempdir().unwrap();
    let contents = "% comment\nJES & $\\pm 1.00\\ [1.0\\%] $ \\\\\n";

    let plain = dir.path().join("SysTable_sfSuperX.tex");
    fs::write(&plain, contents).unwrap();

    let gz = dir.path().join("SysTable_emSuperX.tex.gz");
    let mut enc = GzEncoder::new(fs::File::create(&gz).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();

    let a = TableText::read(&plain).unwrap();
    let b = TableText::read(&gz).unwrap();
    assert_eq!(a.lines, b.lines);
    assert_eq!(a.lines().count(), 2);
    assert_eq!(b.path, gz);
}

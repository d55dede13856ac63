use std::fs;
use std::io::Write;

use insta::assert_debug_snapshot;
use lazyseq::{filter, length, take};
use lazyseq_io::{read_file, Error, Result};

#[test]
fn test_read_whole_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "hello\nworld\n")?;
    let text = read_file(file.path())
        .iter()
        .collect::<Result<String>>()?;
    assert_eq!(text, "hello\nworld\n");
    Ok(())
}

#[test]
fn test_opened_on_first_query() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("later.txt");
    let chars = read_file(&path);
    // the file does not exist yet; building the sequence must not notice
    fs::write(&path, "abc")?;
    assert_eq!(length(&chars), 3);
    Ok(())
}

#[test]
fn test_take_prefix_of_large_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    for i in 0..10_000 {
        writeln!(file, "line {}", i)?;
    }
    let prefix = take(8, read_file(file.path()))
        .iter()
        .collect::<Result<String>>()?;
    assert_eq!(prefix, "line 0\nl");
    Ok(())
}

#[test]
fn test_count_characters() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "a,b,,c")?;
    let commas = filter(|c: &Result<char>| matches!(c, Ok(',')), read_file(file.path()));
    assert_eq!(length(&commas), 3);
    Ok(())
}

#[test]
fn test_missing_file_is_single_error() {
    let dir = tempfile::tempdir().unwrap();
    let items = read_file(dir.path().join("missing.txt")).to_vec();
    assert_eq!(items.len(), 1);
    assert!(matches!(items[0], Err(Error::Io(_))));
}

#[test]
fn test_invalid_utf8_position() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"one\ntw\xc3o\n")?;
    let items = read_file(file.path()).to_vec();
    let rendered = items
        .iter()
        .map(|item| match item {
            Ok(c) => format!("{:?}", c),
            Err(error) => error.to_string(),
        })
        .collect::<Vec<_>>();
    assert_debug_snapshot!(rendered, @r###"
    [
        "'o'",
        "'n'",
        "'e'",
        "'\\n'",
        "'t'",
        "'w'",
        "Invalid UTF-8 on line 2",
    ]
    "###);
    Ok(())
}

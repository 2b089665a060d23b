// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::csv::write_table;
use crate::error::BoxError;

/// Create/truncate `path` and write one table to it (CSV/TSV by `delim`).
/// Returns the path written to.
pub fn write_table_file(
    path: &Path,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    delim: u8,
) -> Result<PathBuf, BoxError> {
    ensure_parent(path)?;
    let file = File::create(path)
        .map_err(|e| format!("Cannot create {}: {e}", path.display()))?;
    write_table(BufWriter::new(file), headers, rows, delim)?;
    Ok(path.to_path_buf())
}

/// Write a text document (the HTML report).
pub fn write_text_file(path: &Path, contents: &str) -> Result<PathBuf, BoxError> {
    ensure_parent(path)?;
    fs::write(path, contents).map_err(|e| format!("Cannot write {}: {e}", path.display()))?;
    Ok(path.to_path_buf())
}

/// A user path that names a directory gets `default_filename` appended.
pub fn resolve_single_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf, BoxError> {
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?; Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_parent(path: &Path) -> Result<(), BoxError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), BoxError> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_hint_gets_default_name() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = join!(tmp.path().to_string_lossy().as_ref(), "/reports/");
        let p = resolve_single_out_path(&dir, "report.html").unwrap();
        assert!(p.ends_with("report.html"));
        assert!(p.parent().unwrap().is_dir());
        assert_eq!(resolve_single_out_path("", "report.html").unwrap(), PathBuf::from("report.html"));
    }

    #[test]
    fn refuses_file_as_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let f = tmp.path().join("plain");
        fs::write(&f, "x").unwrap();
        assert!(ensure_directory(&f).is_err());
    }

    #[test]
    fn table_file_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("a/b/t.tsv");
        let rows = vec![cells![1, 2]];
        write_table_file(&p, None, &rows, b'\t').unwrap();
        assert_eq!(fs::read_to_string(&p).unwrap(), "1\t2\n");
    }
}

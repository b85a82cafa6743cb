// src/corpus/walk.rs

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use walkdir::WalkDir;

/// Piece files under `root`, in a deterministic order.
///
/// A file path is taken as-is; a directory is walked recursively for
/// `.json` files, sorted by file name case-insensitively (full path as the
/// tie-breaker) so runs are reproducible across platforms.
pub fn collect_pieces(root: &Path) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        bail!("{} is not a file or directory", root.display());
    }
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| has_piece_extension(path))
        .collect();
    paths.sort_by_key(|path| (file_name_key(path), path.clone()));
    Ok(paths)
}

fn has_piece_extension(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
}

fn file_name_key(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_single_file_is_taken_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solo.chords");
        fs::write(&path, "{}").unwrap();
        assert_eq!(collect_pieces(&path).unwrap(), vec![path]);
    }

    #[test]
    fn test_directory_walk_is_recursive_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("sub/a.JSON"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let names: Vec<String> = collect_pieces(dir.path())
            .unwrap()
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.JSON", "b.json"]);
    }

    #[test]
    fn test_order_ignores_name_case() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["Bye.json", "all_blues.json", "Candy.json"] {
            fs::write(dir.path().join(name), "{}").unwrap();
        }
        let names: Vec<String> = collect_pieces(dir.path())
            .unwrap()
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["all_blues.json", "Bye.json", "Candy.json"]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_pieces(&dir.path().join("nowhere")).is_err());
    }
}

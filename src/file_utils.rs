use crate::config::IMAGE_SUFFIX;
use crate::error::Result;
use log::warn;
use std::fs;
use std::path::Path;

/// Scans `dir` for entries ending in the image suffix and returns their base
/// names (suffix stripped), sorted lexicographically.
///
/// The suffix match is case-sensitive, and files and subdirectories are both
/// eligible. Entry names that are not valid UTF-8 are skipped with a warning.
pub fn scan_directory(dir: &Path) -> Result<Vec<String>> {
    let mut identifiers: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| match entry.file_name().into_string() {
            Ok(name) => Some(name),
            Err(name) => {
                warn!("Skipping non-UTF-8 entry: {:?}", name);
                None
            }
        })
        .filter_map(|name| name.strip_suffix(IMAGE_SUFFIX).map(str::to_owned))
        .collect();

    identifiers.sort();
    Ok(identifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn filters_by_case_sensitive_suffix() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.png");
        touch(dir.path(), "b.png");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "c.PNG");

        let ids = scan_directory(dir.path()).unwrap();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn includes_matching_subdirectories() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.png");
        fs::create_dir(dir.path().join("flags.png")).unwrap();

        let ids = scan_directory(dir.path()).unwrap();
        assert_eq!(ids, vec!["a".to_string(), "flags".to_string()]);
    }

    #[test]
    fn suffix_only_name_yields_empty_identifier() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".png");

        let ids = scan_directory(dir.path()).unwrap();
        assert_eq!(ids, vec![String::new()]);
    }

    #[test]
    fn sorts_identifiers() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "zebra.png");
        touch(dir.path(), "apple.png");
        touch(dir.path(), "mango.png");

        let ids = scan_directory(dir.path()).unwrap();
        assert_eq!(
            ids,
            vec!["apple".to_string(), "mango".to_string(), "zebra".to_string()]
        );
    }

    #[test]
    fn empty_directory_yields_no_identifiers() {
        let dir = TempDir::new().unwrap();
        assert!(scan_directory(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("nope");
        assert!(scan_directory(&gone).is_err());
    }
}

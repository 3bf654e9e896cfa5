use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::error;
use walkdir::{DirEntry, WalkDir};

/// Recursive image lookup under one root folder.
///
/// Entries are visited sorted by file name within each directory, so two
/// walks over an unchanged tree yield the same sequence. That lets the
/// counting pass and the processing pass agree on the total.
pub struct ImageScan {
    root: PathBuf,
    extension: String,
    excluded_dirs: Vec<PathBuf>,
    ignore_patterns: Vec<Pattern>,
}

impl ImageScan {
    /// `extension` is given without the dot and compared case-sensitively.
    pub fn new(root: &Path, extension: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            extension: extension.to_string(),
            excluded_dirs: Vec::new(),
            ignore_patterns: Vec::new(),
        }
    }

    /// Never descend into `dir`.
    pub fn excluding(mut self, dir: &Path) -> Self {
        self.excluded_dirs.push(dir.to_path_buf());
        self
    }

    pub fn ignoring(mut self, patterns: Vec<Pattern>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Matching image paths in visit order. Walk failures are yielded as
    /// errors, not skipped.
    pub fn iter(&self) -> impl Iterator<Item = Result<PathBuf, walkdir::Error>> + '_ {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !self.is_pruned(entry))
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    if !entry.file_type().is_dir() && self.is_image(entry.path()) {
                        Some(Ok(entry.into_path()))
                    } else {
                        None
                    }
                }
                Err(err) => Some(Err(err)),
            })
    }

    /// Counting pass. Stops at the first walk error.
    pub fn count(&self) -> Result<usize, walkdir::Error> {
        let mut total = 0usize;
        for entry in self.iter() {
            entry?;
            total += 1;
        }
        Ok(total)
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        let path = entry.path();
        if entry.file_type().is_dir() && self.excluded_dirs.iter().any(|dir| dir == path) {
            return true;
        }
        self.ignore_patterns
            .iter()
            .any(|pattern| pattern.matches_path(path))
    }

    fn is_image(&self, path: &Path) -> bool {
        has_extension(path, &self.extension)
    }
}

/// True when the final path component ends in `.<extension>`, byte for byte.
/// A bare `.jpg` counts as a `jpg` file.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    match path.file_name() {
        Some(name) => {
            let name = name.to_string_lossy();
            let suffix = format!(".{}", extension);
            name.ends_with(&suffix)
        }
        None => false,
    }
}

/// Compile glob ignore patterns, logging and dropping invalid ones.
pub fn compile_ignore_patterns(globs: &[String]) -> Vec<Pattern> {
    globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(p) => Some(p),
            Err(e) => {
                error!("Invalid glob pattern '{}': {}", glob, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_has_extension_is_case_sensitive() {
        assert!(has_extension(Path::new("/a/b.jpg"), "jpg"));
        assert!(has_extension(Path::new("/a/.jpg"), "jpg"));
        assert!(has_extension(Path::new("x.tar.jpg"), "jpg"));
        assert!(!has_extension(Path::new("/a/b.JPG"), "jpg"));
        assert!(!has_extension(Path::new("/a/b.jpeg"), "jpg"));
        assert!(!has_extension(Path::new("/a/jpg"), "jpg"));
    }

    #[test]
    fn test_walk_order_is_sorted_and_recursive() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("b_dir")).unwrap();
        fs::write(root.join("c.jpg"), b"c").unwrap();
        fs::write(root.join("a.jpg"), b"a").unwrap();
        fs::write(root.join("b_dir").join("z.jpg"), b"z").unwrap();
        fs::write(root.join("notes.txt"), b"n").unwrap();

        let scan = ImageScan::new(root, "jpg");
        let found: Vec<PathBuf> = scan.iter().map(|p| p.unwrap()).collect();
        assert_eq!(
            found,
            vec![
                root.join("a.jpg"),
                root.join("b_dir").join("z.jpg"),
                root.join("c.jpg"),
            ]
        );
        assert_eq!(scan.count().unwrap(), 3);
    }

    #[test]
    fn test_directory_with_image_name_is_not_counted() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("album.jpg")).unwrap();
        fs::write(tmp.path().join("album.jpg").join("inner.jpg"), b"x").unwrap();

        let scan = ImageScan::new(tmp.path(), "jpg");
        assert_eq!(scan.count().unwrap(), 1);
    }

    #[test]
    fn test_excluded_and_ignored_dirs_are_pruned() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("out")).unwrap();
        fs::create_dir_all(root.join("thumbs")).unwrap();
        fs::write(root.join("keep.jpg"), b"k").unwrap();
        fs::write(root.join("out").join("old.jpg"), b"o").unwrap();
        fs::write(root.join("thumbs").join("t.jpg"), b"t").unwrap();

        let scan = ImageScan::new(root, "jpg")
            .excluding(&root.join("out"))
            .ignoring(compile_ignore_patterns(&["*/thumbs".to_string()]));
        let found: Vec<PathBuf> = scan.iter().map(|p| p.unwrap()).collect();
        assert_eq!(found, vec![root.join("keep.jpg")]);
    }

    #[test]
    fn test_invalid_glob_is_dropped() {
        let patterns = compile_ignore_patterns(&["[".to_string(), "*.tmp".to_string()]);
        assert_eq!(patterns.len(), 1);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let tmp = tempdir().unwrap();
        let scan = ImageScan::new(&tmp.path().join("nope"), "jpg");
        assert!(scan.count().is_err());
    }
}

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Entries always carry a leading `.`; matched case-sensitively against the file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: BTreeSet<String>,
}

impl ExtensionSet {
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = raw
            .into_iter()
            .map(|ext| ext.as_ref().trim().to_string())
            .filter(|ext| !ext.is_empty())
            .map(|ext| {
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{}", ext)
                }
            })
            .collect();

        Self { extensions }
    }

    pub fn from_csv(csv: &str) -> Self {
        Self::new(csv.split(','))
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    names: BTreeSet<String>,
}

impl IgnoreSet {
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = raw
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        Self { names }
    }

    pub fn from_csv(csv: &str) -> Self {
        Self::new(csv.split(','))
    }

    pub fn contains(&self, dir_name: &str) -> bool {
        self.names.contains(dir_name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct BundleConfig {
    pub source_dir: PathBuf,
    pub target_file: PathBuf,
    pub extensions: ExtensionSet,
    pub ignored: IgnoreSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub content: String,
    pub file_count: usize,
}

impl Bundle {
    pub fn is_empty(&self) -> bool {
        self.file_count == 0
    }
}

/// Path of `path` relative to `root`, as shown in a file header.
pub fn display_name(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy()
        .trim_start_matches(std::path::MAIN_SEPARATOR)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_set_normalizes_input() {
        let set = ExtensionSet::from_csv("go, .rs,,  ");
        let exts: Vec<&str> = set.iter().collect();
        assert_eq!(exts, vec![".go", ".rs"]);
    }

    #[test]
    fn test_extension_set_suffix_match() {
        let set = ExtensionSet::new([".go"]);
        assert!(set.matches("main.go"));
        assert!(!set.matches("main.go.bak"));
        assert!(!set.matches("main.GO"));
        assert!(!ExtensionSet::new([".go2"]).matches("x.go"));
    }

    #[test]
    fn test_empty_extension_set_matches_nothing() {
        let set = ExtensionSet::from_csv("");
        assert!(set.is_empty());
        assert!(!set.matches("main.go"));
    }

    #[test]
    fn test_ignore_set_exact_names() {
        let set = IgnoreSet::from_csv("test, node_modules");
        assert!(set.contains("test"));
        assert!(set.contains("node_modules"));
        assert!(!set.contains("tests"));
        assert!(IgnoreSet::from_csv("").is_empty());
    }

    #[test]
    fn test_display_name_is_root_relative() {
        let root = Path::new("/repo");
        let path = Path::new("/repo/src/main.go");
        assert_eq!(display_name(path, root), "src/main.go");
    }
}

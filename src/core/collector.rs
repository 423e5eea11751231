use crate::domain::error::{CollectError, Result};
use crate::domain::models::{Bundle, ExtensionSet, IgnoreSet, display_name};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

const HEADER_PREFIX: &str = "// File: ";
const FILE_SEPARATOR: &str = "\n\n\n\n";

/// Depth-first, pre-order walk; entries are visited in file-name order.
pub struct Collector<'a> {
    root: &'a Path,
    extensions: &'a ExtensionSet,
    ignored: &'a IgnoreSet,
    content: String,
    file_count: usize,
}

impl<'a> Collector<'a> {
    pub fn new(root: &'a Path, extensions: &'a ExtensionSet, ignored: &'a IgnoreSet) -> Self {
        Self {
            root,
            extensions,
            ignored,
            content: String::new(),
            file_count: 0,
        }
    }

    pub fn run(mut self) -> Result<Bundle> {
        info!("Collecting files in: {}", self.root.display());
        debug!("Extensions: {:?}", self.extensions.iter().collect::<Vec<_>>());
        if self.ignored.is_empty() {
            debug!("No ignored directories");
        } else {
            debug!("Ignored directories: {:?}", self.ignored.iter().collect::<Vec<_>>());
        }

        let ignored = self.ignored;
        let walker = WalkDir::new(self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_ignored_dir(e, ignored));

        for entry in walker {
            let entry = entry.map_err(|e| walk_error(e, self.root))?;

            if entry.depth() == 0 {
                if !entry.file_type().is_dir() {
                    return Err(CollectError::DirectoryRead {
                        path: entry.path().to_path_buf(),
                        source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
                    });
                }
                continue;
            }

            if !entry.file_type().is_file() {
                continue;
            }

            if self.extensions.matches(&entry.file_name().to_string_lossy()) {
                self.append(entry.path())?;
            }
        }

        info!("Collected {} files", self.file_count);
        Ok(Bundle {
            content: self.content.trim().to_string(),
            file_count: self.file_count,
        })
    }

    fn append(&mut self, path: &Path) -> Result<()> {
        let bytes = fs::read(path).map_err(|source| CollectError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let contents = String::from_utf8_lossy(&bytes);
        let name = display_name(path, self.root);

        info!("Reading file: {}", name);
        self.content.push_str(HEADER_PREFIX);
        self.content.push_str(&name);
        self.content.push('\n');
        self.content.push_str(contents.trim());
        self.content.push_str(FILE_SEPARATOR);
        self.file_count += 1;
        Ok(())
    }
}

/// Collects `root` into a single bundle. See [`Collector`].
pub fn collect(root: &Path, extensions: &ExtensionSet, ignored: &IgnoreSet) -> Result<Bundle> {
    Collector::new(root, extensions, ignored).run()
}

// The root itself is never pruned, only directories found beneath it.
fn is_ignored_dir(entry: &DirEntry, ignored: &IgnoreSet) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    let pruned = entry
        .file_name()
        .to_str()
        .is_some_and(|name| ignored.contains(name));
    if pruned {
        debug!("Skipping ignored directory: {}", entry.path().display());
    }
    pruned
}

fn walk_error(err: walkdir::Error, root: &Path) -> CollectError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    CollectError::DirectoryRead { path, source }
}

use crate::domain::models::Bundle;
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub trait OutputWriter {
    fn write(&self, content: &str) -> anyhow::Result<()>;

    fn target(&self) -> &Path;
}

/// Writes the bundle to a file, creating it or truncating what was there.
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing output to file: {}", self.path.display());
        fs::write(&self.path, content)?;
        info!(
            "Output written to file: {} (size: {} bytes)",
            self.path.display(),
            content.len()
        );
        Ok(())
    }

    fn target(&self) -> &Path {
        &self.path
    }
}

pub fn write_output(writer: &dyn OutputWriter, bundle: &Bundle) -> anyhow::Result<()> {
    writer.write(&bundle.content)?;

    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Green))?;
    writeln!(stdout, "{}", summary_line(bundle, writer.target()))?;
    stdout.execute(ResetColor)?;
    Ok(())
}

fn summary_line(bundle: &Bundle, target: &Path) -> String {
    let noun = if bundle.file_count == 1 { "file" } else { "files" };
    format!(
        "✓ Bundled {} {} into {}",
        bundle.file_count,
        noun,
        target.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::NamedTempFile;

    struct MemoryWriter {
        path: PathBuf,
        written: RefCell<Vec<String>>,
    }

    impl OutputWriter for MemoryWriter {
        fn write(&self, content: &str) -> anyhow::Result<()> {
            self.written.borrow_mut().push(content.to_string());
            Ok(())
        }

        fn target(&self) -> &Path {
            &self.path
        }
    }

    #[test]
    fn test_file_writer() {
        let temp_file = NamedTempFile::new().unwrap();
        let writer = FileWriter::new(temp_file.path().to_path_buf());
        let content = "Test output";

        writer.write(content).unwrap();

        let read_content = fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(read_content, content);
    }

    #[test]
    fn test_file_writer_truncates_existing_file() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "a much longer previous bundle").unwrap();
        let writer = FileWriter::new(temp_file.path().to_path_buf());

        writer.write("short").unwrap();

        assert_eq!(fs::read_to_string(temp_file.path()).unwrap(), "short");
    }

    #[test]
    fn test_file_writer_missing_directory_fails() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let writer = FileWriter::new(temp_dir.path().join("missing").join("out.txt"));

        assert!(writer.write("content").is_err());
    }

    #[test]
    fn test_write_output_writes_bundle_content() {
        let writer = MemoryWriter {
            path: PathBuf::from("/tmp/out.txt"),
            written: RefCell::new(Vec::new()),
        };
        let bundle = Bundle {
            content: "// File: a.go\npackage a".to_string(),
            file_count: 1,
        };

        write_output(&writer, &bundle).unwrap();

        assert_eq!(*writer.written.borrow(), vec![bundle.content.clone()]);
    }

    #[test]
    fn test_summary_line() {
        let target = Path::new("/tmp/out.txt");
        let one = Bundle {
            content: String::new(),
            file_count: 1,
        };
        let many = Bundle {
            content: String::new(),
            file_count: 3,
        };

        assert_eq!(summary_line(&one, target), "✓ Bundled 1 file into /tmp/out.txt");
        assert_eq!(
            summary_line(&many, target),
            "✓ Bundled 3 files into /tmp/out.txt"
        );
    }
}

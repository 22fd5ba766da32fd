use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the output directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules for generated code that is regenerated on every run.
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Rules for scaffold files the user is expected to take over.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist (scaffold)
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Fixture {
        name: &'static str,
        rules: FileRules,
        content: &'static str,
    }

    impl GeneratedFile for Fixture {
        fn path(&self, base: &Path) -> PathBuf {
            base.join(self.name)
        }

        fn rules(&self) -> FileRules {
            self.rules
        }

        fn render(&self) -> String {
            self.content.to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.ts");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_always_overwrite_replaces_existing() {
        let temp = TempDir::new().unwrap();
        let fixture = Fixture {
            name: "out.ts",
            rules: FileRules::always_overwrite(),
            content: "updated",
        };

        fs::write(temp.path().join("out.ts"), "original").unwrap();
        let result = fixture.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("out.ts")).unwrap(),
            "updated"
        );
    }

    #[test]
    fn test_create_once_skips_existing() {
        let temp = TempDir::new().unwrap();
        let fixture = Fixture {
            name: "package.json",
            rules: FileRules::create_once(),
            content: "{}",
        };

        fs::write(temp.path().join("package.json"), "user edits").unwrap();
        let result = fixture.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("package.json")).unwrap(),
            "user edits"
        );
    }

    #[test]
    fn test_create_once_writes_when_missing() {
        let temp = TempDir::new().unwrap();
        let fixture = Fixture {
            name: "package.json",
            rules: FileRules::create_once(),
            content: "{}",
        };

        let result = fixture.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert!(temp.path().join("package.json").exists());
    }
}

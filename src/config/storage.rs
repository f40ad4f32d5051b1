use crate::domain::ports::SheetStorage;
use crate::utils::error::Result;
use std::fs::{self, File};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl SheetStorage for LocalStorage {
    fn create_sheet(&self, path: &str) -> Result<Box<dyn std::io::Write + Send>> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // File::create 會截斷舊檔，每次執行都重寫輸出
        let file = File::create(full_path)?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_create_sheet_makes_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_string_lossy().to_string());

        let mut sheet = storage.create_sheet("data/data.csv").unwrap();
        sheet.write_all(b"name,diet\n").unwrap();
        sheet.flush().unwrap();
        drop(sheet);

        let content = std::fs::read_to_string(temp_dir.path().join("data/data.csv")).unwrap();
        assert_eq!(content, "name,diet\n");
    }

    #[test]
    fn test_create_sheet_truncates_previous_output() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_string_lossy().to_string());

        let mut first = storage.create_sheet("data.csv").unwrap();
        first.write_all(b"old content that is quite long\n").unwrap();
        drop(first);

        let mut second = storage.create_sheet("data.csv").unwrap();
        second.write_all(b"new\n").unwrap();
        drop(second);

        let content = std::fs::read_to_string(temp_dir.path().join("data.csv")).unwrap();
        assert_eq!(content, "new\n");
    }
}

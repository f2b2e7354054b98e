use std::path::Path;
use tokio::fs::{self, File};
use tokio::io::{BufReader, BufWriter};

use crate::errors::AppError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Open an input file for line-by-line reading
    pub async fn open_input<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, AppError> {
        let path = path.as_ref();
        let file = File::open(path).await
            .map_err(|e| AppError::File(format!("Error opening input file {:?}: {}", path, e)))?;
        Ok(BufReader::new(file))
    }

    /// Create (or truncate) an output file, creating missing parent directories
    pub async fn create_output<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>, AppError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await
                .map_err(|e| AppError::File(format!("Error creating output directory {:?}: {}", parent, e)))?;
        }
        let file = File::create(path).await
            .map_err(|e| AppError::File(format!("Error creating output file {:?}: {}", path, e)))?;
        Ok(BufWriter::new(file))
    }
}

//! Outputs command implementation

use std::path::{Path, PathBuf};

use crate::core::outputs::{existing_outputs, print_generated_files};

/// Report which known export files exist in `dir`.
pub fn handle_list_outputs(dir: &Path) -> Vec<PathBuf> {
    let files = existing_outputs(dir);
    if files.is_empty() {
        println!("No generated files found in {}", dir.display());
    } else {
        print_generated_files(&files);
    }
    files
}

//! The five files a league history export produces.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

pub const MATCHUPS_CSV: &str = "espn_fantasy_matchups.csv";
pub const STANDINGS_CSV: &str = "espn_fantasy_standings.csv";
pub const DRAFT_PICKS_CSV: &str = "espn_fantasy_draft_picks.csv";
pub const COMPLETE_DATA_JSON: &str = "espn_fantasy_complete_data.json";
pub const DRAFT_DATA_JSON: &str = "espn_fantasy_draft_data.json";

/// Known outputs in reporting order.
pub const KNOWN_OUTPUTS: [&str; 5] = [
    MATCHUPS_CSV,
    STANDINGS_CSV,
    DRAFT_PICKS_CSV,
    COMPLETE_DATA_JSON,
    DRAFT_DATA_JSON,
];

/// Known outputs present under `dir`, in `KNOWN_OUTPUTS` order. Missing files
/// are skipped.
pub fn existing_outputs(dir: &Path) -> Vec<PathBuf> {
    KNOWN_OUTPUTS
        .iter()
        .map(|name| dir.join(name))
        .filter(|path| path.is_file())
        .collect()
}

/// The "Generated files" report, one bare file name per line.
pub fn write_generated_files<W: Write>(out: &mut W, files: &[PathBuf]) -> io::Result<()> {
    writeln!(out, "Generated files:")?;
    for file in files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        writeln!(out, "  - {}", name)?;
    }
    Ok(())
}

pub fn print_generated_files(files: &[PathBuf]) {
    // A closed stdout is not worth failing the command over
    let _ = write_generated_files(&mut io::stdout(), files);
}

//! File loading and validation utilities for level files.

use std::{fs, path::Path};

use color_eyre::eyre::{OptionExt as _, Result};
use tracing::{info, warn};

use crate::level::Level;

/// File extension of level files.
pub(crate) const LEVEL_EXTENSION: &str = "maze";

/// Scans a directory for level files and loads the valid ones.
///
/// This function searches `dir` for regular files with the `.maze` extension, in file name order,
/// and parses and validates each of them. A level is named after its file stem. Files that fail to
/// parse or validate are skipped with a warning so a single broken file does not keep the rest from
/// loading.
///
/// # Errors
///
/// This function may return errors if:
/// - The directory cannot be read
/// - A file name is not valid UTF-8
/// - A level file cannot be read
pub(crate) fn fetch_levels(dir: &Path) -> Result<Vec<Level>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file()
            && path
                .extension()
                .is_some_and(|extension| extension == LEVEL_EXTENSION)
        {
            paths.push(path);
        }
    }
    paths.sort();

    let mut levels = Vec::new();
    for path in paths {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_eyre("failed to convert file stem to string slice")?;
        let contents = fs::read_to_string(&path)?;

        match Level::parse(name, &contents).and_then(|level| level.validate().map(|()| level)) {
            Ok(level) => levels.push(level),
            Err(err) => warn!(path = %path.display(), %err, "skipping level file"),
        }
    }
    info!(dir = %dir.display(), count = levels.len(), "loaded level files");

    Ok(levels)
}

#[cfg(test)]
mod tests {
    use std::{
        env,
        path::PathBuf,
        process,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    /// Counter keeping the scratch directories of concurrently running tests apart.
    static SCRATCH_COUNTER: AtomicUsize = AtomicUsize::new(0);

    /// Creates an empty scratch directory unique to the calling test.
    fn create_scratch_dir() -> PathBuf {
        let dir = env::temp_dir().join(format!(
            "mazetui-{}-{}",
            process::id(),
            SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        if dir.exists() {
            fs::remove_dir_all(&dir).expect("failed to clear scratch directory");
        }
        fs::create_dir_all(&dir).expect("failed to create scratch directory");
        dir
    }

    /// Writes `contents` to `name` inside `dir`.
    fn write_file(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).expect("failed to write test file");
    }

    #[test]
    fn test_fetch_levels_loads_valid_files_in_name_order() {
        let dir = create_scratch_dir();
        write_file(&dir, "b-second.maze", "S.\n#G");
        write_file(&dir, "a-first.maze", "SG");

        let levels = fetch_levels(&dir).expect("directory should load");
        let names: Vec<&str> = levels.iter().map(Level::name).collect();

        assert_eq!(names, vec!["a-first", "b-second"]);
        fs::remove_dir_all(&dir).expect("failed to remove scratch directory");
    }

    #[test]
    fn test_fetch_levels_skips_invalid_files() {
        let dir = create_scratch_dir();
        write_file(&dir, "good.maze", "S.G");
        write_file(&dir, "ragged.maze", "S.G\n#");
        write_file(&dir, "nostart.maze", "..G");
        write_file(&dir, "nogoal.maze", "S..");
        write_file(&dir, "symbols.maze", "S?G");

        let levels = fetch_levels(&dir).expect("directory should load");
        let names: Vec<&str> = levels.iter().map(Level::name).collect();

        assert_eq!(names, vec!["good"]);
        fs::remove_dir_all(&dir).expect("failed to remove scratch directory");
    }

    #[test]
    fn test_fetch_levels_ignores_other_extensions_and_directories() {
        let dir = create_scratch_dir();
        write_file(&dir, "notes.txt", "S.G");
        write_file(&dir, "level.maze.bak", "S.G");
        fs::create_dir(dir.join("nested.maze")).expect("failed to create nested directory");

        let levels = fetch_levels(&dir).expect("directory should load");

        assert!(levels.is_empty(), "no file should have been loaded");
        fs::remove_dir_all(&dir).expect("failed to remove scratch directory");
    }

    #[test]
    fn test_fetch_levels_missing_directory() {
        let dir = create_scratch_dir();

        let result = fetch_levels(&dir.join("missing"));

        assert!(result.is_err(), "a missing directory should be an error");
        fs::remove_dir_all(&dir).expect("failed to remove scratch directory");
    }
}

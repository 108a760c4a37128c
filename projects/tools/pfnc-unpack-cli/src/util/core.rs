use crate::error::CliError;
use std::fs;
use std::path::*;

/// Recursively visits directories and collects entries.
///
/// Directories or entries that cannot be read are skipped, the traversal
/// continues with the remaining entries.
///
/// # Arguments
///
/// * `dir`: The directory to start the traversal from.
/// * `entries`: A mutable reference to the vector of entries to populate.
pub fn find_all_files(dir: &Path, entries: &mut Vec<fs::DirEntry>) -> std::io::Result<()> {
    let dir_entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(()),
    };

    for entry in dir_entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue, // e.g. no access
        };

        let path = entry.path();
        if path.is_dir() {
            find_all_files(&path, entries)?;
        } else {
            entries.push(entry);
        }
    }
    Ok(())
}

/// Prints a failed file to stderr without stopping the batch.
pub fn handle_process_entry_error(result: Result<(), CliError>) {
    if let Err(e) = result {
        eprintln!("{e}");
    }
}

/// Canonicalizes a CLI path argument, creating the directory if it doesn't exist.
pub fn canonicalize_cli_path(value: &str) -> Result<PathBuf, String> {
    let path = Path::new(value);

    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| format!("Failed to create directory: {e}"))?;
    }

    fs::canonicalize(path).map_err(|e| format!("Invalid path: {e}"))
}

/// Canonicalizes a CLI path argument that must already exist.
pub fn canonicalize_existing_path(value: &str) -> Result<PathBuf, String> {
    fs::canonicalize(value).map_err(|e| format!("Invalid path '{value}': {e}"))
}

/// Path of `source` mirrored from under `input_dir` into `output_dir`.
pub fn mirrored_path(source: &Path, input_dir: &Path, output_dir: &Path) -> PathBuf {
    match source.strip_prefix(input_dir) {
        Ok(relative) => output_dir.join(relative),
        Err(_) => output_dir.join(source.file_name().unwrap_or(source.as_os_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("top.raw"), [0u8]).unwrap();
        fs::write(dir.path().join("a/b/nested.raw"), [0u8]).unwrap();

        let mut entries = Vec::new();
        find_all_files(dir.path(), &mut entries).unwrap();
        let mut names: Vec<_> = entries.iter().map(|e| e.file_name()).collect();
        names.sort();
        assert_eq!(names, ["nested.raw", "top.raw"]);
    }

    #[test]
    fn missing_directory_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut entries = Vec::new();
        find_all_files(&dir.path().join("missing"), &mut entries).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn mirrors_relative_paths() {
        let mirrored = mirrored_path(
            Path::new("/in/frames/0001.raw"),
            Path::new("/in"),
            Path::new("/out"),
        );
        assert_eq!(mirrored, Path::new("/out/frames/0001.raw"));
    }
}

use std::fs;
use std::path::Path;

/// File names of the datasets in `dir`, sorted. An unreadable directory lists nothing.
pub fn list_datasets(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::warn!(dir = %dir.display(), %error, "cannot list dataset directory");
            return Vec::new();
        }
    };

    let mut names = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_file()))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect::<Vec<_>>();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn lists_files_sorted_and_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("wind.txt"), "t\ns\n").unwrap();
        fs::write(dir.path().join("energy.txt"), "t\ns\n").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        assert_eq!(list_datasets(dir.path()), ["energy.txt", "wind.txt"]);
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_datasets(&dir.path().join("absent")).is_empty());
    }
}

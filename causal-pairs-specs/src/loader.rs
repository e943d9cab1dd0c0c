//! Fixture file loading.

use crate::{CausalFixture, SpecError, SpecResult};
use std::fs;
use std::path::{Path, PathBuf};

fn load_error(path: &Path, error: impl ToString) -> SpecError {
    SpecError::Load {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

/// Load a single fixture file.
pub fn load_fixture(path: &Path) -> SpecResult<CausalFixture> {
    let content = fs::read_to_string(path).map_err(|e| load_error(path, e))?;
    CausalFixture::from_toml_str(&content).map_err(|e| SpecError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Every `.toml` file under `dir`, as `/`-separated paths relative to
/// `dir`, sorted. Hidden files and directories are skipped. A missing
/// directory has no fixtures.
pub fn fixture_paths(dir: &Path) -> SpecResult<Vec<String>> {
    let mut found = Vec::new();
    let mut pending: Vec<PathBuf> = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        if !current.is_dir() {
            continue;
        }
        for entry in fs::read_dir(&current).map_err(|e| load_error(&current, e))? {
            let path = entry.map_err(|e| load_error(&current, e))?.path();
            let hidden = path
                .file_name()
                .and_then(|name| name.to_str())
                .map_or(false, |name| name.starts_with('.'));
            if hidden {
                continue;
            }
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().map_or(false, |e| e == "toml") {
                let relative = path.strip_prefix(dir).unwrap_or(&path);
                let name: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                found.push(name.join("/"));
            }
        }
    }

    found.sort();
    Ok(found)
}

/// Load every fixture under `dir`, keyed by its relative path.
pub fn load_all_fixtures(dir: &Path) -> SpecResult<Vec<(String, CausalFixture)>> {
    fixture_paths(dir)?
        .into_iter()
        .map(|name| {
            let fixture = load_fixture(&dir.join(&name))?;
            Ok((name, fixture))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("decoding")
            .join("single-pair.toml");
        let fixture = load_fixture(&path).unwrap();
        assert!(fixture.title.is_some());
    }

    #[test]
    fn test_load_all_fixtures() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
        let fixtures = load_all_fixtures(&dir).unwrap();
        assert!(fixtures.len() >= 4);
        assert!(fixtures
            .iter()
            .any(|(name, _)| name.ends_with("single-pair.toml")));
    }

    #[test]
    fn test_fixture_paths_skip_hidden_and_other_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::create_dir_all(dir.path().join(".cache")).unwrap();
        fs::write(dir.path().join("b.toml"), "").unwrap();
        fs::write(dir.path().join("nested").join("a.toml"), "").unwrap();
        fs::write(dir.path().join(".cache").join("c.toml"), "").unwrap();
        fs::write(dir.path().join("notes.md"), "").unwrap();

        let paths = fixture_paths(dir.path()).unwrap();
        assert_eq!(paths, vec!["b.toml", "nested/a.toml"]);

        let fixtures = load_all_fixtures(dir.path()).unwrap();
        assert_eq!(fixtures.len(), 2);
        assert!(fixtures.iter().all(|(_, f)| f.cases.is_empty()));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let fixtures = load_all_fixtures(&dir.path().join("absent")).unwrap();
        assert!(fixtures.is_empty());
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "cases = 3").unwrap();
        let err = load_fixture(&path).unwrap_err();
        assert!(matches!(err, SpecError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }
}

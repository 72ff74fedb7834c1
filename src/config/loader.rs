use std::fs;
use std::path::{Path, PathBuf};

use super::InterpretationConfig;
use crate::core::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".symbolmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<InterpretationConfig> {
    let config = toml::from_str::<InterpretationConfig>(contents)
        .map_err(|e| Error::parse(CONFIG_FILE_NAME, e))?;
    config.validate()?;
    Ok(config)
}

/// Load an explicitly requested config file. Unlike discovery, a missing or
/// invalid file here is an error.
pub fn load_config_from_path(path: &Path) -> Result<InterpretationConfig> {
    let contents = fs::read_to_string(path)?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading a discovered config; unreadable or invalid files are logged
/// and skipped.
fn try_load_config_from_path(config_path: &Path) -> Option<InterpretationConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} in {}. Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Discover `.symbolmap.toml` from `start` upward, falling back to defaults.
pub fn load_config(start: &Path) -> InterpretationConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            InterpretationConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [archetypes]
            max_dominant = 2

            [tensions]
            contradiction_min = 7
        "#})
        .unwrap();

        assert_eq!(config.archetypes.max_dominant, 2);
        assert_eq!(config.archetypes.secondary_floor, 0.15);
        assert_eq!(config.tensions.contradiction_min, 7);
        assert_eq!(config.motifs.min_occurrences, 3);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = parse_and_validate_config(indoc! {r#"
            [archetypes]
            dominant_threshold = 2.0
        "#});
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let result = parse_and_validate_config("[archetypes\n");
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_discovers_config_in_parent() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[motifs]\nmin_occurrences = 5\n",
        )
        .unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config(&nested);
        assert_eq!(config.motifs.min_occurrences, 5);
    }

    #[test]
    fn test_directory_ancestors_limited() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }
}

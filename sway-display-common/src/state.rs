use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use crate::error::StateError;
use crate::mode::Mode;

pub const STATE_FILE_NAME: &str = "sway-display-state";

/// Single-token store remembering the last selected mode.
#[derive(Debug, Clone)]
pub struct ModeStore {
    path: PathBuf,
}

impl ModeStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at `<cache-base>/sway-display-state`.
    pub fn from_env() -> Result<Self, StateError> {
        let base = cache_base(std::env::var_os("XDG_CACHE_HOME"), dirs::home_dir())
            .ok_or(StateError::NoCacheDir)?;
        Ok(Self::new(base.join(STATE_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored token, trimmed and unvalidated, or `default` when
    /// the file is missing or blank.
    pub fn read_mode(&self, default: Mode) -> Result<String, StateError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No state file at {:?}, using {}", self.path, default);
                return Ok(default.to_string());
            }
            Err(e) => {
                return Err(StateError::FileRead {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let token = content.trim();
        if token.is_empty() {
            log::debug!("State file {:?} is empty, using {}", self.path, default);
            return Ok(default.to_string());
        }

        log::debug!("Read mode {:?} from {:?}", token, self.path);
        Ok(token.to_string())
    }

    /// Truncates the state file and writes the bare token. The parent
    /// directory must already exist.
    pub fn write_mode(&self, mode: Mode) -> Result<(), StateError> {
        fs::write(&self.path, mode.as_str()).map_err(|e| StateError::FileWrite {
            path: self.path.clone(),
            source: e,
        })?;

        log::debug!("Mode {} saved to {:?}", mode, self.path);
        Ok(())
    }
}

/// `XDG_CACHE_HOME` when set and non-empty, else `<home>/.cache`.
pub fn cache_base(xdg_cache_home: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    match xdg_cache_home {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => home.map(|home| home.join(".cache")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_default() {
        let temp_dir = tempdir().unwrap();
        let store = ModeStore::new(temp_dir.path().join(STATE_FILE_NAME));

        assert_eq!(store.read_mode(Mode::Mirror).unwrap(), "mirror");
        assert_eq!(store.read_mode(Mode::Laptop).unwrap(), "laptop");
    }

    #[test]
    fn test_blank_file_reads_default() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(STATE_FILE_NAME);
        let store = ModeStore::new(path.clone());

        fs::write(&path, "").unwrap();
        assert_eq!(store.read_mode(Mode::Mirror).unwrap(), "mirror");

        fs::write(&path, "  \n\t").unwrap();
        assert_eq!(store.read_mode(Mode::Mirror).unwrap(), "mirror");
    }

    #[test]
    fn test_read_trims_without_validating() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(STATE_FILE_NAME);
        let store = ModeStore::new(path.clone());

        fs::write(&path, "extend\n").unwrap();
        assert_eq!(store.read_mode(Mode::Mirror).unwrap(), "extend");

        fs::write(&path, "bogus").unwrap();
        assert_eq!(store.read_mode(Mode::Mirror).unwrap(), "bogus");
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(STATE_FILE_NAME);
        let store = ModeStore::new(path.clone());

        for mode in Mode::CYCLE {
            store.write_mode(mode).unwrap();
            assert_eq!(store.read_mode(Mode::Mirror).unwrap(), mode.as_str());
            assert_eq!(fs::read_to_string(&path).unwrap(), mode.as_str());
        }
    }

    #[test]
    fn test_write_truncates_previous_contents() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(STATE_FILE_NAME);
        fs::write(&path, "external-with-trailing-junk\n").unwrap();

        ModeStore::new(path.clone()).write_mode(Mode::Laptop).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "laptop");
    }

    #[test]
    fn test_write_does_not_create_directory() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing").join(STATE_FILE_NAME);
        let store = ModeStore::new(path.clone());

        match store.write_mode(Mode::Extend) {
            Err(StateError::FileWrite { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("Expected StateError::FileWrite, got {:?}", other),
        }
        assert!(!path.parent().unwrap().exists());
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        let temp_dir = tempdir().unwrap();
        // A directory in place of the file fails with something other than NotFound.
        let store = ModeStore::new(temp_dir.path().to_path_buf());

        assert!(matches!(
            store.read_mode(Mode::Mirror),
            Err(StateError::FileRead { .. })
        ));
    }

    #[test]
    fn test_cache_base_prefers_xdg() {
        let base = cache_base(Some(OsString::from("/xdg/cache")), Some(PathBuf::from("/home/u")));
        assert_eq!(base, Some(PathBuf::from("/xdg/cache")));
    }

    #[test]
    fn test_cache_base_falls_back_to_home() {
        let home = Some(PathBuf::from("/home/u"));

        assert_eq!(cache_base(None, home.clone()), Some(PathBuf::from("/home/u/.cache")));
        assert_eq!(
            cache_base(Some(OsString::new()), home),
            Some(PathBuf::from("/home/u/.cache"))
        );
        assert_eq!(cache_base(None, None), None);
    }
}

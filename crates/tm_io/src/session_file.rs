//! File backend: one file per key under a session directory.
//!
//! Lets the submitting process and the rendering process be different
//! invocations within the same session. Writes go through a temp file and a
//! rename so a reader never observes a half-written entry. The directory is
//! expected to live somewhere the session boundary cleans up (e.g. under the
//! OS temp dir); this crate never deletes entries itself.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{SessionStore, StoreResult};

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStore for FileStore {
    fn put(&self, key: &str, value: String) -> StoreResult<()> {
        fs::create_dir_all(&self.dir)?;
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, self.entry_path(key))?;
        tracing::debug!(key, dir = %self.dir.display(), "session entry written");
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

//! Directory-backed cache storing one file per key.
//!
//! Values are written atomically: the adapter writes a hidden temporary file
//! next to the target and renames it into place, so a crash never leaves a
//! half-written snapshot behind. A torn or foreign file is still possible if
//! something else writes the directory; the form store discards anything it
//! cannot parse.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};
use tracing::debug;

use crate::domain::ports::{CacheKey, SubmissionCache, SubmissionCacheError};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Cache whose entries live as `<key>.json` files in a single directory.
#[derive(Debug)]
pub struct DirectorySubmissionCache {
    dir: Dir,
}

impl DirectorySubmissionCache {
    /// Open (creating if needed) the cache directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionCacheError::Io`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> Result<Self, SubmissionCacheError> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(path, ambient_authority()))
            .map(Self::from_dir)
            .map_err(|err| io_error(path.as_str(), &err))
    }

    /// Use an already opened directory capability.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

fn file_name(key: &CacheKey) -> String {
    format!("{key}.json")
}

fn io_error(path: &str, err: &io::Error) -> SubmissionCacheError {
    SubmissionCacheError::io(format!("{path}: {err}"))
}

impl SubmissionCache for DirectorySubmissionCache {
    fn get(&self, key: &CacheKey) -> Result<Option<String>, SubmissionCacheError> {
        let name = file_name(key);
        match self.dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(&name, &err)),
        }
    }

    fn put(&self, key: &CacheKey, value: &str) -> Result<(), SubmissionCacheError> {
        let name = file_name(key);
        write_atomic(&self.dir, &name, value)?;
        debug!(file = %name, "wrote cache entry");
        Ok(())
    }
}

fn write_atomic(dir: &Dir, file_name: &str, contents: &str) -> Result<(), SubmissionCacheError> {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(
        ".{file_name}.tmp.{}.{suffix}.{counter}",
        std::process::id()
    );

    write_to_temp_file(dir, &tmp_name, contents)?;
    if let Err(err) = dir.rename(&tmp_name, dir, file_name) {
        // Best-effort cleanup; the rename error is what matters.
        drop(dir.remove_file(&tmp_name));
        return Err(io_error(file_name, &err));
    }
    sync_directory(dir);
    Ok(())
}

fn write_to_temp_file(
    dir: &Dir,
    tmp_name: &str,
    contents: &str,
) -> Result<(), SubmissionCacheError> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| io_error(tmp_name, &err))?;

    if let Err(err) = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all())
    {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(io_error(tmp_name, &err));
    }
    Ok(())
}

fn sync_directory(dir: &Dir) {
    // Directory sync is best-effort and unsupported on some platforms.
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        debug!("cache directory sync skipped");
    }
}

#[cfg(test)]
mod tests {
    //! Exercises the adapter against a real temporary directory.
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    struct CacheDir {
        _temp: TempDir,
        path: Utf8PathBuf,
    }

    #[fixture]
    fn cache_dir() -> CacheDir {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = Utf8PathBuf::from_path_buf(temp.path().join("form-cache"))
            .expect("temp path is UTF-8");
        CacheDir { _temp: temp, path }
    }

    #[rstest]
    fn open_creates_the_directory(cache_dir: CacheDir) {
        let _cache = DirectorySubmissionCache::open(&cache_dir.path).expect("open cache");
        assert!(cache_dir.path.is_dir());
    }

    #[rstest]
    fn missing_entry_reads_as_none(cache_dir: CacheDir) {
        let cache = DirectorySubmissionCache::open(&cache_dir.path).expect("open cache");
        let value = cache.get(&CacheKey::default()).expect("get succeeds");
        assert!(value.is_none());
    }

    #[rstest]
    fn put_then_get_returns_latest_value(cache_dir: CacheDir) {
        let cache = DirectorySubmissionCache::open(&cache_dir.path).expect("open cache");
        let key = CacheKey::default();

        cache.put(&key, r#"{"fullName":"Ada"}"#).expect("first put");
        cache.put(&key, r#"{"fullName":"Grace"}"#).expect("second put");

        let value = cache.get(&key).expect("get succeeds");
        assert_eq!(value.as_deref(), Some(r#"{"fullName":"Grace"}"#));
        assert!(cache_dir.path.join("formData.json").is_file());
    }

    #[rstest]
    fn no_temporary_files_are_left_behind(cache_dir: CacheDir) {
        let cache = DirectorySubmissionCache::open(&cache_dir.path).expect("open cache");
        cache.put(&CacheKey::default(), "{}").expect("put succeeds");

        let names: Vec<String> = std::fs::read_dir(&cache_dir.path)
            .expect("list cache dir")
            .map(|entry| {
                entry
                    .expect("dir entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(names, vec!["formData.json".to_owned()]);
    }

    #[rstest]
    fn entries_survive_reopening(cache_dir: CacheDir) {
        let key = CacheKey::new("ticketForm").expect("valid key");
        DirectorySubmissionCache::open(&cache_dir.path)
            .expect("open cache")
            .put(&key, "saved")
            .expect("put succeeds");

        let reopened = DirectorySubmissionCache::open(&cache_dir.path).expect("reopen cache");
        let value = reopened.get(&key).expect("get succeeds");
        assert_eq!(value.as_deref(), Some("saved"));
    }
}

//! Disk cache for raw resort feed documents
//!
//! Provides a `FeedCache` that stores the exact XML document last fetched
//! for a resort, keyed by the resort identifier. Freshness is judged from
//! the cache file's modification time, so no expiry metadata is embedded
//! in the file itself and the cached bytes stay identical to the feed.

use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

/// Stores and retrieves raw feed documents on disk
///
/// Each resort's feed lives at `<cache-dir>/<identifier>.xml`. The cache
/// directory is created lazily on the first write; a missing directory or
/// file is simply a cache miss, never an error.
#[derive(Debug, Clone)]
pub struct FeedCache {
    /// Directory where cached feed files are stored
    cache_dir: PathBuf,
}

impl FeedCache {
    /// Creates a new FeedCache using an XDG-compliant cache directory
    ///
    /// Uses `~/.cache/skifeed/` on Linux, or the equivalent XDG path on other
    /// platforms. Returns `None` if the cache directory cannot be determined
    /// (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "skifeed")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self { cache_dir })
    }

    /// Creates a new FeedCache with a custom cache directory
    ///
    /// Used by the `--cache-dir` flag and by tests.
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Returns the path to the cache file for the given resort identifier
    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.xml", key))
    }

    /// Ensures the cache directory exists
    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)
    }

    /// Reads a cached feed document if one exists and is still fresh
    ///
    /// A cached file is fresh while its age in whole seconds is at most
    /// `max_age_secs`, measured from the file's modification time. A file
    /// with a modification time in the future counts as age zero.
    ///
    /// # Arguments
    /// * `key` - Resort identifier naming the cache file
    /// * `max_age_secs` - Maximum age in seconds before the entry is stale
    ///
    /// # Returns
    /// * `Some(String)` with the document content on a fresh hit
    /// * `None` when the directory or file is absent, the file is stale,
    ///   or the file cannot be read
    pub fn read(&self, key: &str, max_age_secs: u64) -> Option<String> {
        let path = self.cache_path(key);
        let modified = fs::metadata(&path).ok()?.modified().ok()?;
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or(Duration::ZERO);
        if age.as_secs() > max_age_secs {
            return None;
        }
        fs::read_to_string(path).ok()
    }

    /// Writes a feed document to the cache, overwriting any prior content
    ///
    /// Creates the cache directory if it does not exist yet. The content is
    /// written verbatim so the cache file byte-equals the fetched document.
    ///
    /// # Arguments
    /// * `key` - Resort identifier naming the cache file
    /// * `content` - The raw XML document to store
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err` if directory creation or file writing fails
    pub fn write(&self, key: &str, content: &str) -> std::io::Result<()> {
        self.ensure_dir()?;
        fs::write(self.cache_path(key), content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_cache() -> (FeedCache, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let cache = FeedCache::with_dir(temp_dir.path().to_path_buf());
        (cache, temp_dir)
    }

    /// Rewinds the modification time of a cache file by `secs` seconds
    fn age_cache_file(cache: &FeedCache, key: &str, secs: u64) {
        let path = cache.cache_path(key);
        let file = fs::File::options()
            .write(true)
            .open(path)
            .expect("Cache file should exist");
        file.set_modified(SystemTime::now() - Duration::from_secs(secs))
            .expect("Should set modification time");
    }

    #[test]
    fn test_write_creates_file_in_cache_directory() {
        let (cache, temp_dir) = create_test_cache();

        cache
            .write("la-clusaz", "<station></station>")
            .expect("Write should succeed");

        let expected_path = temp_dir.path().join("la-clusaz.xml");
        assert!(expected_path.exists(), "Cache file should exist");
    }

    #[test]
    fn test_write_stores_content_verbatim() {
        let (cache, temp_dir) = create_test_cache();
        let document = "<station>\n  <infos><nom>La Clusaz</nom></infos>\n</station>";

        cache
            .write("la-clusaz", document)
            .expect("Write should succeed");

        let content = fs::read_to_string(temp_dir.path().join("la-clusaz.xml"))
            .expect("Should read cache file");
        assert_eq!(content, document, "Cache file should byte-equal the document");
    }

    #[test]
    fn test_read_returns_none_for_missing_file() {
        let (cache, _temp_dir) = create_test_cache();

        assert!(
            cache.read("nonexistent", 3600).is_none(),
            "Should miss for an absent cache file"
        );
    }

    #[test]
    fn test_read_returns_none_for_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let cache = FeedCache::with_dir(temp_dir.path().join("never").join("created"));

        assert!(
            cache.read("la-clusaz", 3600).is_none(),
            "Should miss when the cache directory does not exist"
        );
    }

    #[test]
    fn test_read_returns_fresh_entry() {
        let (cache, _temp_dir) = create_test_cache();
        cache
            .write("la-clusaz", "<station/>")
            .expect("Write should succeed");
        age_cache_file(&cache, "la-clusaz", 10);

        let content = cache.read("la-clusaz", 60);

        assert_eq!(content.as_deref(), Some("<station/>"));
    }

    #[test]
    fn test_read_returns_none_for_stale_entry() {
        let (cache, _temp_dir) = create_test_cache();
        cache
            .write("la-clusaz", "<station/>")
            .expect("Write should succeed");
        age_cache_file(&cache, "la-clusaz", 120);

        assert!(
            cache.read("la-clusaz", 60).is_none(),
            "Entry older than max age should be a miss"
        );
    }

    #[test]
    fn test_read_hit_at_exact_max_age_boundary() {
        let (cache, _temp_dir) = create_test_cache();
        cache
            .write("la-clusaz", "<station/>")
            .expect("Write should succeed");
        age_cache_file(&cache, "la-clusaz", 60);

        // Age equal to the maximum is still a hit; one second past is not.
        assert!(cache.read("la-clusaz", 60).is_some());
        assert!(cache.read("la-clusaz", 59).is_none());
    }

    #[test]
    fn test_read_with_zero_max_age_hits_only_within_same_second() {
        let (cache, _temp_dir) = create_test_cache();
        cache
            .write("la-clusaz", "<station/>")
            .expect("Write should succeed");

        // Written moments ago: age rounds down to zero seconds.
        assert!(cache.read("la-clusaz", 0).is_some());

        age_cache_file(&cache, "la-clusaz", 1);
        assert!(cache.read("la-clusaz", 0).is_none());
    }

    #[test]
    fn test_write_creates_directory_if_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested_path = temp_dir.path().join("nested").join("cache").join("dir");
        let cache = FeedCache::with_dir(nested_path.clone());

        cache
            .write("la-clusaz", "<station/>")
            .expect("Write should succeed");

        assert!(nested_path.exists(), "Nested directory should be created");
        assert!(
            nested_path.join("la-clusaz.xml").exists(),
            "Cache file should exist"
        );
    }

    #[test]
    fn test_overwrite_existing_cache() {
        let (cache, _temp_dir) = create_test_cache();

        cache
            .write("la-clusaz", "<station><infos><nom>old</nom></infos></station>")
            .expect("First write should succeed");
        cache
            .write("la-clusaz", "<station><infos><nom>new</nom></infos></station>")
            .expect("Second write should succeed");

        let content = cache.read("la-clusaz", 3600).expect("Should read cache");
        assert!(content.contains("new"), "Cache should contain latest document");
        assert!(!content.contains("old"), "Prior content should be gone");
    }

    #[test]
    fn test_new_creates_xdg_compliant_path() {
        if let Some(cache) = FeedCache::new() {
            let path_str = cache.cache_dir.to_string_lossy();
            assert!(
                path_str.contains("skifeed"),
                "Cache path should contain project name"
            );
        }
        // Test passes if new() returns None (e.g., no home directory in CI)
    }
}

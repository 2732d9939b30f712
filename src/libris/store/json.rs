use super::memory::InMemoryStore;
use super::BookStore;
use crate::error::{LibrisError, Result};
use crate::model::Book;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// On-disk shape of a book. Missing or `null` fields fall back to zero values so
/// that incomplete entries fail validation (and are skipped) instead of failing
/// the whole file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct BookRecord {
    #[serde(deserialize_with = "null_as_default")]
    id: i64,
    #[serde(rename = "titulo", deserialize_with = "null_as_default")]
    title: String,
    #[serde(rename = "autor", deserialize_with = "null_as_default")]
    author: String,
    #[serde(rename = "anio", deserialize_with = "null_as_default")]
    year: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id(),
            title: book.title().to_string(),
            author: book.author().to_string(),
            year: book.year(),
        }
    }
}

/// Catalog persisted as a JSON array.
///
/// The file is read once in [`JsonStore::open`]; afterwards reads are served from
/// memory and every successful mutation rewrites the whole file through a
/// temp-file-and-rename.
pub struct JsonStore {
    mem: InMemoryStore,
    path: PathBuf,
    tmp_path: PathBuf,
    skipped_on_load: usize,
}

impl JsonStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                LibrisError::Store(format!("Not a file path: {}", path.display()))
            })?;
        let tmp_path = path.with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));

        let mut store = Self {
            mem: InMemoryStore::new(),
            path,
            tmp_path,
            skipped_on_load: 0,
        };
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries in the file that were dropped while loading because
    /// they were invalid or repeated an earlier id.
    pub fn skipped_on_load(&self) -> usize {
        self.skipped_on_load
    }

    fn load(&mut self) -> Result<()> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no catalog file, starting empty");
                return Ok(());
            }
            Err(e) => return Err(LibrisError::Io(e)),
        };

        let records: Option<Vec<Option<BookRecord>>> =
            serde_json::from_str(&content).map_err(LibrisError::Serialization)?;

        for record in records.unwrap_or_default() {
            let record = record.unwrap_or_default();
            let id = record.id;
            let added = Book::new(record.id, record.title, record.author, record.year)
                .and_then(|book| self.mem.add(book));
            if let Err(e) = added {
                tracing::warn!(id, error = %e, "skipping catalog entry");
                self.skipped_on_load += 1;
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            loaded = self.mem.len(),
            skipped = self.skipped_on_load,
            "catalog loaded"
        );
        Ok(())
    }

    /// Write the full catalog to disk.
    ///
    /// The data goes to a sibling temp file first; the rename is the only point
    /// at which the previous file is replaced.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(LibrisError::Io)?;
            }
        }

        let records: Vec<BookRecord> = self.mem.list().iter().map(BookRecord::from).collect();
        let content =
            serde_json::to_string_pretty(&records).map_err(LibrisError::Serialization)?;

        let written = fs::write(&self.tmp_path, content)
            .and_then(|()| fs::rename(&self.tmp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&self.tmp_path);
            return Err(LibrisError::Io(e));
        }

        tracing::debug!(path = %self.path.display(), count = records.len(), "catalog saved");
        Ok(())
    }
}

impl BookStore for JsonStore {
    fn add(&mut self, book: Book) -> Result<()> {
        self.mem.add(book)?;
        self.save()
    }

    fn update(&mut self, book: Book) -> Result<()> {
        self.mem.update(book)?;
        self.save()
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        self.mem.delete(id)?;
        self.save()
    }

    fn find_by_id(&self, id: i64) -> Result<Book> {
        self.mem.find_by_id(id)
    }

    fn list(&self) -> Vec<Book> {
        self.mem.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn book(id: i64, title: &str, year: i64) -> Book {
        Book::new(id, title, "Author", year).unwrap()
    }

    fn catalog_path(dir: &TempDir) -> PathBuf {
        dir.path().join("libros.json")
    }

    fn leftover_tmp_files(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "tmp"))
            .collect()
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(catalog_path(&dir)).unwrap();

        assert!(store.list().is_empty());
        assert_eq!(store.skipped_on_load(), 0);
        assert_eq!(store.path(), catalog_path(&dir));
        assert!(!catalog_path(&dir).exists());
    }

    #[test]
    fn round_trip_preserves_order_and_values() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(&dir);

        let mut store = JsonStore::open(&path).unwrap();
        store.add(book(3, "Three", 1999)).unwrap();
        store.add(book(1, "One", 2008)).unwrap();
        store.add(book(2, "Two", 0)).unwrap();

        let reopened = JsonStore::open(&path).unwrap();
        assert_eq!(reopened.list(), store.list());
        let ids: Vec<i64> = reopened.list().iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn writes_expected_field_names() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(&dir);

        let mut store = JsonStore::open(&path).unwrap();
        store
            .add(Book::new(1, "Clean Code", "Robert C. Martin", 2008).unwrap())
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"id": 1, "titulo": "Clean Code", "autor": "Robert C. Martin", "anio": 2008}
            ])
        );
    }

    #[test]
    fn mutations_are_persisted() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(&dir);

        let mut store = JsonStore::open(&path).unwrap();
        store.add(book(1, "One", 2000)).unwrap();
        store.add(book(2, "Two", 2000)).unwrap();
        store.add(book(3, "Three", 2000)).unwrap();
        store.delete(2).unwrap();

        let mut one = store.find_by_id(1).unwrap();
        one.set_title("Uno").unwrap();
        store.update(one).unwrap();

        let reopened = JsonStore::open(&path).unwrap();
        let titles: Vec<String> = reopened
            .list()
            .iter()
            .map(|b| b.title().to_string())
            .collect();
        assert_eq!(titles, vec!["Uno", "Three"]);
    }

    #[test]
    fn skips_invalid_records_on_load() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(&dir);
        fs::write(
            &path,
            r#"[
                {"id": 1, "titulo": "Good", "autor": "A", "anio": 2000},
                {"id": 2, "titulo": "Bad year", "autor": "A", "anio": -3},
                {"id": 3, "titulo": "Also good", "autor": "A", "anio": 1990}
            ]"#,
        )
        .unwrap();

        let store = JsonStore::open(&path).unwrap();
        let ids: Vec<i64> = store.list().iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(store.skipped_on_load(), 1);
    }

    #[test]
    fn skips_incomplete_and_repeated_records() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(&dir);
        fs::write(
            &path,
            r#"[
                {"id": 1, "titulo": "First", "autor": "A", "anio": 2000},
                {"id": 2, "autor": "No title", "anio": 2000},
                {"id": 1, "titulo": "Repeat", "autor": "A", "anio": 2000},
                {"id": 0, "titulo": "Zero id", "autor": "A", "anio": 2000}
            ]"#,
        )
        .unwrap();

        let store = JsonStore::open(&path).unwrap();
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.find_by_id(1).unwrap().title(), "First");
        assert_eq!(store.skipped_on_load(), 3);
    }

    #[test]
    fn null_fields_and_entries_are_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(&dir);
        fs::write(
            &path,
            r#"[
                {"id": 1, "titulo": "Good", "autor": "A", "anio": 2000},
                {"id": 2, "titulo": null, "autor": "A", "anio": 2000},
                {"id": 3, "titulo": "No year", "autor": "A", "anio": null},
                null
            ]"#,
        )
        .unwrap();

        let store = JsonStore::open(&path).unwrap();
        let ids: Vec<i64> = store.list().iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(store.find_by_id(3).unwrap().year(), 0);
        assert_eq!(store.skipped_on_load(), 2);
    }

    #[test]
    fn unparseable_file_fails_to_open() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(&dir);
        fs::write(&path, "{ not json").unwrap();

        let err = JsonStore::open(&path).err().unwrap();
        assert!(matches!(err, LibrisError::Serialization(_)));
        assert!(err.is_storage());
    }

    #[test]
    fn wrong_shape_fails_to_open() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(&dir);
        fs::write(&path, r#"{"id": 1}"#).unwrap();

        assert!(JsonStore::open(&path).is_err());
    }

    #[test]
    fn failed_update_does_not_touch_file() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(&dir);

        let mut store = JsonStore::open(&path).unwrap();
        store.add(book(1, "One", 2000)).unwrap();

        let before_content = fs::read(&path).unwrap();
        let before_mtime = fs::metadata(&path).unwrap().modified().unwrap();

        let err = store.update(book(42, "Ghost", 2000)).unwrap_err();
        assert!(matches!(err, LibrisError::NotFound(42)));

        assert_eq!(fs::read(&path).unwrap(), before_content);
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before_mtime);
    }

    #[test]
    fn failed_add_and_delete_do_not_create_file() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(&dir);

        let mut store = JsonStore::open(&path).unwrap();
        assert!(matches!(store.delete(1), Err(LibrisError::NotFound(1))));
        assert!(!path.exists());
    }

    #[test]
    fn successful_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonStore::open(catalog_path(&dir)).unwrap();
        store.add(book(1, "One", 2000)).unwrap();
        store.add(book(2, "Two", 2000)).unwrap();

        assert!(leftover_tmp_files(dir.path()).is_empty());
    }

    #[test]
    fn creates_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("libros.json");

        let mut store = JsonStore::open(&path).unwrap();
        store.add(book(1, "One", 2000)).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn failed_save_keeps_memory_ahead_and_can_retry() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(&dir);
        let mut store = JsonStore::open(&path).unwrap();

        // A directory at the target path makes the rename fail.
        fs::create_dir(&path).unwrap();

        let err = store.add(book(1, "One", 2000)).unwrap_err();
        assert!(err.is_storage());
        assert_eq!(store.list().len(), 1);
        assert!(leftover_tmp_files(dir.path()).is_empty());

        fs::remove_dir(&path).unwrap();
        store.save().unwrap();

        let reopened = JsonStore::open(&path).unwrap();
        assert_eq!(reopened.find_by_id(1).unwrap().title(), "One");
    }

    #[test]
    fn failed_save_keeps_previous_file_intact() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(&dir);
        let mut store = JsonStore::open(&path).unwrap();
        store.add(book(1, "One", 2000)).unwrap();
        let before = fs::read(&path).unwrap();

        // A directory at the temp path makes the temp write fail.
        fs::create_dir(&store.tmp_path).unwrap();

        let err = store.add(book(2, "Two", 2001)).unwrap_err();
        assert!(matches!(err, LibrisError::Io(_)));
        assert_eq!(store.list().len(), 2);
        assert_eq!(fs::read(&path).unwrap(), before);

        let reopened = JsonStore::open(&path).unwrap();
        let ids: Vec<i64> = reopened.list().iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec![1]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn partial_temp_write_is_cleaned_up() {
        let full = Path::new("/dev/full");
        if !full.exists() {
            return;
        }
        let dir = TempDir::new().unwrap();
        let path = catalog_path(&dir);
        let mut store = JsonStore::open(&path).unwrap();
        store.add(book(1, "One", 2000)).unwrap();
        let before = fs::read(&path).unwrap();

        // Writes through the temp path hit a full device.
        std::os::unix::fs::symlink(full, &store.tmp_path).unwrap();

        let err = store.add(book(2, "Two", 2001)).unwrap_err();
        assert!(err.is_storage());
        assert!(fs::symlink_metadata(&store.tmp_path).is_err());
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn rejects_path_without_file_name() {
        assert!(matches!(
            JsonStore::open(".."),
            Err(LibrisError::Store(_))
        ));
    }
}

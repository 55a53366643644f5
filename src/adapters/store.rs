use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ports::DocumentStore;
use crate::utils::error::{CatalogError, Result};

/// Filesystem page cache: `<data>/list` holds the chart windows,
/// `<data>/films` one document per film, named by sanitized title.
#[derive(Debug, Clone)]
pub struct LocalDocumentStore {
    list_dir: PathBuf,
    films_dir: PathBuf,
}

impl LocalDocumentStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            list_dir: data_dir.join("list"),
            films_dir: data_dir.join("films"),
        }
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.list_dir)?;
        fs::create_dir_all(&self.films_dir)?;
        Ok(())
    }

    /// Stable title-to-filename mapping. Titles may contain the path
    /// separator, which is substituted so every film maps to exactly one
    /// file name.
    pub fn sanitize_title(title: &str) -> String {
        title.replace('/', "--")
    }

    fn detail_path(&self, title: &str) -> PathBuf {
        self.films_dir
            .join(format!("{}.html", Self::sanitize_title(title)))
    }
}

impl DocumentStore for LocalDocumentStore {
    fn listing_pages(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.list_dir)? {
            let name = entry?.file_name().to_string_lossy().into_owned();
            if name.ends_with(".html") {
                names.push(name);
            }
        }
        // Window files sort by name in rank order; the traversal depends on it.
        names.sort();
        Ok(names)
    }

    fn read_listing(&self, name: &str) -> Result<String> {
        Ok(fs::read_to_string(self.list_dir.join(name))?)
    }

    fn read_detail(&self, title: &str) -> Result<String> {
        let path = self.detail_path(title);
        fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                CatalogError::MissingDetailDocument {
                    title: title.to_string(),
                    path,
                }
            } else {
                CatalogError::Io(source)
            }
        })
    }

    fn has_detail(&self, title: &str) -> bool {
        self.detail_path(title).exists()
    }

    fn write_listing(&self, name: &str, body: &[u8]) -> Result<()> {
        fs::write(self.list_dir.join(name), body)?;
        Ok(())
    }

    fn write_detail(&self, title: &str, body: &[u8]) -> Result<()> {
        fs::write(self.detail_path(title), body)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn sanitization_is_stable_and_replaces_separators() {
        assert_eq!(LocalDocumentStore::sanitize_title("Face/Off"), "Face--Off");
        assert_eq!(
            LocalDocumentStore::sanitize_title("Face/Off"),
            LocalDocumentStore::sanitize_title("Face/Off")
        );
        assert_eq!(LocalDocumentStore::sanitize_title("Avatar"), "Avatar");
    }

    #[test]
    fn detail_roundtrip_uses_sanitized_name() {
        let dir = TempDir::new().unwrap();
        let store = LocalDocumentStore::new(dir.path());
        store.ensure_dirs().unwrap();

        store.write_detail("Face/Off", b"<html></html>").unwrap();
        assert!(dir.path().join("films").join("Face--Off.html").exists());
        assert!(store.has_detail("Face/Off"));
        assert_eq!(store.read_detail("Face/Off").unwrap(), "<html></html>");
    }

    #[test]
    fn missing_detail_is_a_dedicated_error() {
        let dir = TempDir::new().unwrap();
        let store = LocalDocumentStore::new(dir.path());
        store.ensure_dirs().unwrap();

        let err = store.read_detail("Nowhere Man").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingDetailDocument { title, .. } if title == "Nowhere Man"
        ));
    }

    #[test]
    fn listing_pages_come_back_sorted() {
        let dir = TempDir::new().unwrap();
        let store = LocalDocumentStore::new(dir.path());
        store.ensure_dirs().unwrap();

        store.write_listing("offset-200.html", b"b").unwrap();
        store.write_listing("offset-0.html", b"a").unwrap();
        store.write_listing("notes.txt", b"ignored").unwrap();

        assert_eq!(
            store.listing_pages().unwrap(),
            vec!["offset-0.html".to_string(), "offset-200.html".to_string()]
        );
    }
}

use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::Review;
use crate::error::Result;
use crate::infrastructure::storage::ascii_json::AsciiPrettyFormatter;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct FileSystemStore {
    output_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn get_path_for_key(&self, key: &str) -> PathBuf {
        self.output_dir.join(format!("{}.json", key))
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    /// Writes `data` as ASCII-only JSON indented by four spaces, replacing any
    /// existing file.
    fn write_json_file<T: Serialize + ?Sized>(&self, key: &str, data: &T) -> Result<PathBuf> {
        self.ensure_dir(&self.output_dir)?;

        let mut content = Vec::new();
        let formatter = AsciiPrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut content, formatter);
        data.serialize(&mut serializer)?;

        let path = self.get_path_for_key(key);
        fs::write(&path, content)?;
        Ok(path)
    }
}

impl Storage for FileSystemStore {
    fn save_reviews(&self, company: &str, reviews: &[Review]) -> Result<PathBuf> {
        self.write_json_file(&StorageKeys::reviews(company), reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn review(title: &str) -> Review {
        Review {
            title: title.to_string(),
            description: "Solid".to_string(),
            date: "Mar 05, 2023".to_string(),
            reviewer: "Jane".to_string(),
            rating: "5".to_string(),
        }
    }

    #[test]
    fn names_file_after_company() {
        let dir = tempdir().unwrap();
        let store = FileSystemStore::new(dir.path());

        let path = store.save_reviews("acme", &[review("a")]).unwrap();
        assert_eq!(path, dir.path().join("acme_reviews.json"));
        assert!(path.exists());
    }

    #[test]
    fn writes_four_space_indented_array() {
        let dir = tempdir().unwrap();
        let store = FileSystemStore::new(dir.path());

        let path = store.save_reviews("acme", &[review("Great")]).unwrap();
        let content = fs::read_to_string(path).unwrap();

        let expected = "[\n    {\n        \"title\": \"Great\",\n        \"description\": \"Solid\",\n        \"date\": \"Mar 05, 2023\",\n        \"reviewer\": \"Jane\",\n        \"rating\": \"5\"\n    }\n]";
        assert_eq!(content, expected);
    }

    #[test]
    fn non_ascii_text_is_escaped_and_reads_back_unchanged() {
        let dir = tempdir().unwrap();
        let store = FileSystemStore::new(dir.path());
        let mut accented = review("Très bien");
        accented.reviewer = "Zoë".to_string();

        let path = store.save_reviews("acme", &[accented.clone()]).unwrap();
        let content = fs::read_to_string(path).unwrap();

        assert!(content.is_ascii());
        assert!(content.contains(r#""title": "Tr\u00e8s bien""#));
        assert!(content.contains(r#""reviewer": "Zo\u00eb""#));
        let loaded: Vec<Review> = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded, vec![accented]);
    }

    #[test]
    fn empty_result_is_an_empty_array() {
        let dir = tempdir().unwrap();
        let store = FileSystemStore::new(dir.path());

        let path = store.save_reviews("acme", &[]).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "[]");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let store = FileSystemStore::new(dir.path());

        store
            .save_reviews("acme", &[review("old"), review("older")])
            .unwrap();
        let path = store.save_reviews("acme", &[review("new")]).unwrap();

        let loaded: Vec<Review> =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(loaded, vec![review("new")]);
    }

    #[test]
    fn creates_missing_output_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("out").join("reviews");
        let store = FileSystemStore::new(&nested);

        store.save_reviews("acme", &[]).unwrap();
        assert!(nested.join("acme_reviews.json").exists());
    }
}

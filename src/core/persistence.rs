use crate::domain::model::StoreContainer;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;

/// Reads and writes the whole [`StoreContainer`] as a single JSON document.
pub struct ContainerRepository<S: Storage> {
    storage: S,
    data_file: String,
}

impl<S: Storage> ContainerRepository<S> {
    pub fn new(storage: S, data_file: impl Into<String>) -> Self {
        Self {
            storage,
            data_file: data_file.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(storage: S, config: &C) -> Self {
        Self::new(storage, config.data_file())
    }

    pub fn data_file(&self) -> &str {
        &self.data_file
    }

    pub fn try_load(&self) -> Result<StoreContainer> {
        let bytes = self.storage.read_file(&self.data_file)?;
        let container = serde_json::from_slice(&bytes)?;
        Ok(container)
    }

    /// Never fails: a missing or unreadable file yields an empty container.
    pub fn load(&self) -> StoreContainer {
        match self.try_load() {
            Ok(container) => {
                tracing::info!(
                    "Data loaded successfully from {} ({} stores)",
                    self.data_file,
                    container.len()
                );
                container
            }
            Err(e) if e.is_not_found() => {
                tracing::info!(
                    "{} not found. Starting with an empty container.",
                    self.data_file
                );
                StoreContainer::new()
            }
            Err(e) => {
                tracing::warn!(
                    "Error loading data from {}: {}. Starting with an empty container.",
                    self.data_file,
                    e
                );
                StoreContainer::new()
            }
        }
    }

    pub fn save(&self, container: &StoreContainer) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(container)?;
        self.storage.write_file(&self.data_file, &bytes)?;
        tracing::info!("Data successfully saved to file {}", self.data_file);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Product, Store};
    use crate::utils::error::StorekeeperError;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl Storage for MemoryStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound).into())
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn sample_container() -> StoreContainer {
        let mut container = StoreContainer::new();

        let mut grocer = Store::new("Grocer");
        grocer.add_product(Product::new(
            "Milk",
            "l",
            12,
            99,
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            "semi-skimmed",
        ));
        grocer.add_product(Product::new(
            "Bread",
            "loaf",
            0,
            150,
            NaiveDate::from_ymd_opt(2023, 12, 24).unwrap(),
            "",
        ));
        container.add_store(grocer);
        container.add_store(Store::new("Empty"));

        container
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let repo = ContainerRepository::new(MemoryStorage::default(), "stores.dat");
        let container = sample_container();

        repo.save(&container).unwrap();
        let loaded = repo.try_load().unwrap();

        assert_eq!(loaded, container);
        assert_eq!(loaded.stores()[0].products().len(), 2);
        assert!(loaded.stores()[1].products().is_empty());
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let repo = ContainerRepository::new(MemoryStorage::default(), "stores.dat");

        assert!(repo.try_load().unwrap_err().is_not_found());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_returns_empty() {
        let storage = MemoryStorage::default();
        storage.write_file("stores.dat", b"\x00\x01not json").unwrap();
        let repo = ContainerRepository::new(storage, "stores.dat");

        assert!(matches!(
            repo.try_load(),
            Err(StorekeeperError::SerializationError(_))
        ));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_dates_persist_as_iso_strings() {
        let repo = ContainerRepository::new(MemoryStorage::default(), "stores.dat");
        repo.save(&sample_container()).unwrap();

        let raw = repo.storage.read_file("stores.dat").unwrap();
        let text = String::from_utf8(raw).unwrap();
        assert!(text.contains("\"2024-01-31\""));
    }
}

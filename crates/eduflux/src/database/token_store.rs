use std::path::PathBuf;
use std::sync::Arc;

use futures::lock::Mutex;

use crate::{Error, Result, Success};

/// Persisted slot for the single session token
///
/// Holds at most one token; a later `set` overwrites an earlier one.
#[async_trait]
pub trait AbstractTokenStore: std::marker::Sync + std::marker::Send {
    /// Persist the token
    async fn set(&self, token: &str) -> Success;

    /// Load the persisted token, if any
    async fn get(&self) -> Result<Option<String>>;

    /// Discard the persisted token
    async fn remove(&self) -> Success;
}

/// In-memory token slot
#[derive(Default, Clone)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

#[async_trait]
impl AbstractTokenStore for MemoryTokenStore {
    async fn set(&self, token: &str) -> Success {
        *self.slot.lock().await = Some(token.to_string());
        Ok(())
    }

    async fn get(&self) -> Result<Option<String>> {
        Ok(self.slot.lock().await.clone())
    }

    async fn remove(&self) -> Success {
        *self.slot.lock().await = None;
        Ok(())
    }
}

/// Token slot persisted as a single file
#[derive(Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> FileTokenStore {
        FileTokenStore { path }
    }
}

#[async_trait]
impl AbstractTokenStore for FileTokenStore {
    async fn set(&self, token: &str) -> Success {
        async_std::fs::write(&self.path, token)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "write",
                with: "token",
            })
    }

    async fn get(&self) -> Result<Option<String>> {
        match async_std::fs::read_to_string(&self.path).await {
            Ok(token) => Ok(Some(token)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(_) => Err(Error::DatabaseError {
                operation: "read",
                with: "token",
            }),
        }
    }

    async fn remove(&self) -> Success {
        match async_std::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(_) => Err(Error::DatabaseError {
                operation: "remove",
                with: "token",
            }),
        }
    }
}

/// Available token store backends
#[derive(Clone)]
pub enum TokenStore {
    Memory(MemoryTokenStore),
    File(FileTokenStore),
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::Memory(MemoryTokenStore::default())
    }
}

impl std::ops::Deref for TokenStore {
    type Target = dyn AbstractTokenStore;

    fn deref(&self) -> &Self::Target {
        match self {
            TokenStore::Memory(memory) => memory,
            TokenStore::File(file) => file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[async_std::test]
    async fn last_write_wins() {
        let store = TokenStore::default();

        store.set("first").await.unwrap();
        store.set("second").await.unwrap();
        assert_eq!(store.get().await.unwrap(), Some("second".to_string()));

        store.remove().await.unwrap();
        assert_eq!(store.get().await.unwrap(), None);
    }

    #[async_std::test]
    async fn file_store_round_trips() {
        let path = std::env::temp_dir().join(format!("eduflux_token_{}", nanoid!(12)));
        let store = FileTokenStore::new(path.clone());

        assert_eq!(store.get().await.unwrap(), None);
        store.set("token").await.unwrap();
        assert_eq!(store.get().await.unwrap(), Some("token".to_string()));

        store.remove().await.unwrap();
        assert_eq!(store.get().await.unwrap(), None);
        // Removing an absent token is not an error
        store.remove().await.unwrap();
    }
}

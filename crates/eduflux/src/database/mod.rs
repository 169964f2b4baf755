use std::ops::Deref;

pub mod definition;
pub mod document;
pub mod seed;

mod file;
mod memory;
mod token_store;

pub use document::Document;
pub use file::FileDb;
pub use memory::MemoryDb;
pub use token_store::*;

use self::definition::AbstractDatabase;

/// Available document store backends
#[derive(Clone)]
pub enum Database {
    Memory(MemoryDb),
    File(FileDb),
}

impl Default for Database {
    fn default() -> Self {
        Self::Memory(MemoryDb::default())
    }
}

impl Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match self {
            Database::Memory(memory) => memory,
            Database::File(file) => file,
        }
    }
}

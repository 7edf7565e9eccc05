//! Data models for the communication board.
//!
//! This module contains the keyed store, categories and the board itself.
//! Models are independent of file formats and the command line.

pub mod board;
pub mod category;
pub mod keyed_store;
pub mod page;

// Re-export all model types
pub use board::{Board, BoardError};
pub use category::Category;
pub use keyed_store::{Entries, KeyedStore, KvEntry, StoreError, StoreKey, DEFAULT_CAPACITY};
pub use page::Page;

//! AAC Board Library
//!
//! This library provides the data layer for a picture-based communication
//! board: a home screen, categories of pictogram images with the text spoken
//! for each, navigation between screens, and the plain-text board file format.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod parser;
pub mod services;

pub use models::{Board, BoardError, Category, KeyedStore, Page, StoreError};

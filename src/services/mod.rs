//! Service layer for board file handling.
//!
//! Services wrap the parser with consistent error context so the command line
//! and embedding applications report failures the same way.

pub mod boards;

// Re-export commonly used types
pub use boards::BoardService;

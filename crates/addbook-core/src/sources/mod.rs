//! Catalog sources: provider traits, Open Library, and an in-memory fake

pub mod memory;
pub mod openlibrary;
pub mod traits;

pub use memory::*;
pub use openlibrary::*;
pub use traits::*;

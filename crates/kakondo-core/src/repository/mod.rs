//! Repository Layer
//!
//! Data access abstractions and the in-memory implementation.

mod memory;
mod traits;

#[cfg(test)]
mod tests;

pub use memory::InMemoryRepository;
pub use traits::Repository;

//! Kakondo Core
//!
//! Everything the site computes, kept free of web dependencies:
//! - domain: Records shown on the site and the entity contract
//! - content: The static content registry
//! - filter: Search and category/type filtering over record collections
//! - aggregate: Statistic-card numbers over full collections
//! - form: Drafts, schemas, reducer, validation and the submission controller
//! - repository: Async CRUD interface with an in-memory implementation
//! - config: Site configuration with JSON overrides

pub mod aggregate;
pub mod config;
pub mod content;
pub mod domain;
pub mod filter;
pub mod form;
pub mod repository;

pub use aggregate::{aggregate, thousands, Aggregates, Tally};
pub use config::{ConfigError, SiteConfig};
pub use filter::{filter, Catalog, FilterCriteria, Searchable, Selection};

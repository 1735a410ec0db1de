//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use kakondo_core::content;
use kakondo_core::domain::{Cbo, StaffContact};
use kakondo_core::repository::{InMemoryRepository, Repository};
use kakondo_core::SiteConfig;
use leptos::prelude::*;

use crate::commands::TimerSubmitter;

pub type CboRepository = Arc<dyn Repository<Cbo>>;
pub type StaffRepository = Arc<dyn Repository<StaffContact>>;

/// App-wide configuration and repositories, alive for the whole session
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<SiteConfig>,
    pub cbos: CboRepository,
    pub staff: StaffRepository,
}

impl AppContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: Arc::new(config),
            cbos: Arc::new(InMemoryRepository::seeded(content::cbos())),
            staff: Arc::new(InMemoryRepository::seeded(content::staff_contacts())),
        }
    }

    /// Submitter honoring the configured latency
    pub fn submitter(&self) -> TimerSubmitter {
        TimerSubmitter::new(self.config.submit_latency_ms)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

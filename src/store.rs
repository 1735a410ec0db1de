//! Dashboard State Store
//!
//! Mirrors the repositories for fine-grained rendering of the dashboard.

use kakondo_core::domain::{Cbo, StaffContact};
use leptos::prelude::*;
use reactive_stores::Store;

#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    pub cbos: Vec<Cbo>,
    pub staff: Vec<StaffContact>,
    /// Set once the first listing arrived
    pub loaded: bool,
}

pub type DashboardStore = Store<DashboardState>;

pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_add_cbo(store: &DashboardStore, cbo: Cbo) {
    store.cbos().write().push(cbo);
}

/// Update a CBO in the store by ID
pub fn store_update_cbo(store: &DashboardStore, updated: Cbo) {
    if let Some(cbo) = store.cbos().write().iter_mut().find(|c| c.id == updated.id) {
        *cbo = updated;
    }
}

pub fn store_remove_cbo(store: &DashboardStore, id: &str) {
    store.cbos().write().retain(|c| c.id != id);
}

pub fn store_add_staff(store: &DashboardStore, contact: StaffContact) {
    store.staff().write().push(contact);
}

pub fn store_remove_staff(store: &DashboardStore, id: &str) {
    store.staff().write().retain(|s| s.id != id);
}

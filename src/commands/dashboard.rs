//! Dashboard Commands
//!
//! CBO and staff roster operations over the session repositories.

use kakondo_core::domain::{Cbo, StaffContact};
use kakondo_core::form::{cbo_from_draft, staff_from_draft, Draft};
use kakondo_core::repository::Repository;

use crate::context::{CboRepository, StaffRepository};

// ========================
// CBOs
// ========================

pub async fn list_cbos(repo: &CboRepository) -> Result<Vec<Cbo>, String> {
    repo.list().await.map_err(|e| e.to_string())
}

/// Register a CBO from a submitted `ADD_CBO` draft
pub async fn add_cbo(repo: &CboRepository, draft: &Draft) -> Result<Cbo, String> {
    let created = repo.add(cbo_from_draft(draft)).await.map_err(|e| {
        log::error!("Failed to add CBO: {}", e);
        e.to_string()
    })?;
    log::info!("Added CBO {} ({})", created.name, created.id);
    Ok(created)
}

/// Flip active/inactive
pub async fn toggle_cbo_status(repo: &CboRepository, id: &str) -> Result<Cbo, String> {
    let mut cbo = repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Not found: {}", id))?;
    cbo.status = cbo.status.toggled();
    repo.update(cbo).await.map_err(|e| {
        log::error!("Failed to update CBO {}: {}", id, e);
        e.to_string()
    })
}

pub async fn remove_cbo(repo: &CboRepository, id: &str) -> Result<(), String> {
    repo.remove(id).await.map(|_| ()).map_err(|e| {
        log::error!("Failed to remove CBO {}: {}", id, e);
        e.to_string()
    })
}

// ========================
// Staff
// ========================

pub async fn list_staff(repo: &StaffRepository) -> Result<Vec<StaffContact>, String> {
    repo.list().await.map_err(|e| e.to_string())
}

pub async fn add_staff(repo: &StaffRepository, draft: &Draft) -> Result<StaffContact, String> {
    let created = repo.add(staff_from_draft(draft)).await.map_err(|e| {
        log::error!("Failed to add staff member: {}", e);
        e.to_string()
    })?;
    log::info!("Added staff member {} ({})", created.name, created.id);
    Ok(created)
}

pub async fn remove_staff(repo: &StaffRepository, id: &str) -> Result<(), String> {
    repo.remove(id).await.map(|_| ()).map_err(|e| {
        log::error!("Failed to remove staff member {}: {}", id, e);
        e.to_string()
    })
}

//! Domain Layer
//!
//! Records shown on the site and the entity contract shared by repositories.

mod cbo;
mod entity;
mod news;
mod project;
mod team;

pub use cbo::{Cbo, CboStatus};
pub use entity::{DomainError, DomainResult, Entity};
pub use news::{NewsItem, NewsKind};
pub use project::{Project, ProjectStatus};
pub use team::{MemberKind, StaffContact, StaffStatus, TeamMember};

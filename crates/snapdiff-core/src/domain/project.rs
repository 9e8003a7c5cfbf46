//! Project — a saved database connection target.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ProjectId = String;

pub fn create_project_id() -> ProjectId {
    Uuid::new_v4().to_string()
}

/// Supported database engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rdbms {
    Mysql,
    Postgresql,
}

/// Connection target the backend dumps snapshots from.
///
/// Carried opaquely through bridge commands; the core performs no
/// validation and never connects anywhere itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_id: ProjectId,
    pub name: String,
    /// Display color tag (hex string chosen by the user).
    pub color: String,
    pub rdbms: Rdbms,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
    pub schema: String,
}

use crate::entity::group::Group;
use crate::entity::status::AnimalStatus;
use crate::error::AppError;
use chrono::{DateTime, Utc};

#[derive(Clone, Debug, PartialEq)]
pub struct Animal {
    pub id: i64,
    pub scientific_name: String,
    pub specie: String,
    /// Meters.
    pub size: f64,
    /// Kilograms.
    pub mass: f64,
    pub status: AnimalStatus,
    pub group: Group,
    pub created_at: DateTime<Utc>,
}

/// Field set written on insert and full update.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimalChanges {
    pub scientific_name: String,
    pub specie: String,
    pub size: f64,
    pub mass: f64,
    pub status: AnimalStatus,
    pub group_id: i64,
}

/// Animal joined with its group, as read from the store.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct AnimalRow {
    pub id: i64,
    pub scientific_name: String,
    pub specie: String,
    pub size: f64,
    pub mass: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub group_id: i64,
    pub group_name: String,
    pub group_created_at: DateTime<Utc>,
}

impl TryFrom<AnimalRow> for Animal {
    type Error = AppError;

    fn try_from(row: AnimalRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            scientific_name: row.scientific_name,
            specie: row.specie,
            size: row.size,
            mass: row.mass,
            status: row.status.parse()?,
            group: Group {
                id: row.group_id,
                name: row.group_name,
                created_at: row.group_created_at,
            },
            created_at: row.created_at,
        })
    }
}

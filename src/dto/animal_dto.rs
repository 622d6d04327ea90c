use crate::dto::group_dto::GroupDto;
use crate::entity::animal::Animal;
use crate::entity::status::AnimalStatus;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalDto {
    pub id: i64,
    pub scientific_name: String,
    pub specie: String,
    pub size: f64,
    pub mass: f64,
    pub status: AnimalStatus,
    pub group: GroupDto,
}

impl From<Animal> for AnimalDto {
    fn from(animal: Animal) -> Self {
        Self {
            id: animal.id,
            scientific_name: animal.scientific_name,
            specie: animal.specie,
            size: animal.size,
            mass: animal.mass,
            status: animal.status,
            group: animal.group.into(),
        }
    }
}

/// Reference to the owning group; only the id is read.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct GroupRefDto {
    #[validate(required(message = "Group id is required"))]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body of create and full update.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnimalRequestDto {
    #[validate(required(message = "Scientific name is required"))]
    #[validate(length(min = 1, max = 255, message = "Scientific name must be between 1 and 255 characters"))]
    pub scientific_name: Option<String>,
    #[validate(required(message = "Specie is required"))]
    #[validate(length(min = 1, max = 255, message = "Specie must be between 1 and 255 characters"))]
    pub specie: Option<String>,
    #[validate(required(message = "Size is required"))]
    #[validate(range(exclusive_min = 0.0, message = "Size must be greater than zero"))]
    pub size: Option<f64>,
    #[validate(required(message = "Mass is required"))]
    #[validate(range(exclusive_min = 0.0, message = "Mass must be greater than zero"))]
    pub mass: Option<f64>,
    pub status: Option<AnimalStatus>,
    #[validate(required(message = "Group is required"), nested)]
    pub group: Option<GroupRefDto>,
}

/// Body of partial update: only the naming fields can change.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnimalPatchDto {
    #[validate(required(message = "Scientific name is required"))]
    #[validate(length(min = 1, max = 255, message = "Scientific name must be between 1 and 255 characters"))]
    pub scientific_name: Option<String>,
    #[validate(required(message = "Specie is required"))]
    #[validate(length(min = 1, max = 255, message = "Specie must be between 1 and 255 characters"))]
    pub specie: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_reads_camel_case_and_rejects_non_positive_size() {
        let payload: AnimalRequestDto = serde_json::from_value(json!({
            "scientificName": "Panthera leo",
            "specie": "Lion",
            "size": 0.0,
            "mass": 190.5,
            "group": {"id": 1}
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("size"));
        assert!(!fields.contains_key("mass"));
        assert!(!fields.contains_key("scientific_name"));
    }

    #[test]
    fn test_group_reference_is_required() {
        let payload: AnimalRequestDto = serde_json::from_value(json!({
            "scientificName": "Panthera leo",
            "specie": "Lion",
            "size": 1.8,
            "mass": 190.5
        }))
        .unwrap();

        assert!(payload.validate().unwrap_err().field_errors().contains_key("group"));
    }

    #[test]
    fn test_response_is_camel_case() {
        let dto = AnimalDto {
            id: 7,
            scientific_name: "Panthera leo".into(),
            specie: "Lion".into(),
            size: 1.8,
            mass: 190.5,
            status: AnimalStatus::Active,
            group: GroupDto { id: 1, name: "Mammals".into() },
        };

        let value = serde_json::to_value(dto).unwrap();
        assert_eq!(value["scientificName"], "Panthera leo");
        assert_eq!(value["status"], "ACTIVE");
        assert_eq!(value["group"]["name"], "Mammals");
    }
}

//! Category domain model.

use crate::model::category::CategoryDto;

/// Genre or classification tag referenced by reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Unique slug, also the primary key.
    pub slug: String,
    pub description: String,
}

impl Category {
    /// Converts the category domain model to a DTO for API responses.
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            slug: self.slug,
            description: self.description,
        }
    }

    /// Converts an entity model to a category domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            slug: entity.slug,
            description: entity.description,
        }
    }
}

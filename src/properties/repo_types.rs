use serde::{Deserialize, Serialize};
use sqlx::types::Decimal;
use sqlx::FromRow;

/// Property record in the database.
///
/// Every column except the id is nullable: the create path binds NULL for any
/// field the caller left out.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: i32,
    pub owner_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_photo_url: Option<String>,
    pub cover_photo_url: Option<String>,
    pub cost_per_night: Option<i32>, // integer cents
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub post_code: Option<String>,
    pub country: Option<String>,
    pub parking_spaces: Option<i32>,
    pub number_of_bathrooms: Option<i32>,
    pub number_of_bedrooms: Option<i32>,
}

/// Search result row: the property columns plus the review aggregate.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PropertyWithRating {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub property: Property,
    pub average_rating: Option<Decimal>,
}

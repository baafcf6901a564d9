use sqlx::PgPool;

use crate::error::DbError;

use super::dto::NewProperty;
use super::repo_types::{Property, PropertyWithRating};
use super::search::{build_search, dollars_to_cents, PropertyFilters};

/// Run the dynamic property search. Not-found is an empty vec, not an error.
pub async fn search(
    db: &PgPool,
    filters: &PropertyFilters,
    limit: i64,
) -> Result<Vec<PropertyWithRating>, DbError> {
    let rows = build_search(filters, limit)
        .build_query_as::<PropertyWithRating>()
        .fetch_all(db)
        .await?;
    Ok(rows)
}

/// Insert a property with the fixed 14-column list and return the created
/// row. Absent fields bind NULL; the cost arrives in dollars and is stored as
/// integer cents.
pub async fn create(db: &PgPool, p: &NewProperty) -> Result<Property, DbError> {
    let property = sqlx::query_as::<_, Property>(
        r#"
        INSERT INTO properties (owner_id, title, description, thumbnail_photo_url,
                                cover_photo_url, cost_per_night, street, city, province,
                                post_code, country, parking_spaces, number_of_bathrooms,
                                number_of_bedrooms)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING id, owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                  cost_per_night, street, city, province, post_code, country,
                  parking_spaces, number_of_bathrooms, number_of_bedrooms
        "#,
    )
    .bind(p.owner_id)
    .bind(p.title.as_deref())
    .bind(p.description.as_deref())
    .bind(p.thumbnail_photo_url.as_deref())
    .bind(p.cover_photo_url.as_deref())
    .bind(p.cost_per_night.map(dollars_to_cents))
    .bind(p.street.as_deref())
    .bind(p.city.as_deref())
    .bind(p.province.as_deref())
    .bind(p.post_code.as_deref())
    .bind(p.country.as_deref())
    .bind(p.parking_spaces)
    .bind(p.number_of_bathrooms)
    .bind(p.number_of_bedrooms)
    .fetch_one(db)
    .await?;
    Ok(property)
}

use sqlx::PgPool;

use crate::error::DbError;

use super::repo_types::GuestReservation;

/// List a guest's reservations with joined property data and per-property
/// average rating, earliest start date first.
pub async fn list_for_guest(
    db: &PgPool,
    guest_id: i32,
    limit: i64,
) -> Result<Vec<GuestReservation>, DbError> {
    let rows = sqlx::query_as::<_, GuestReservation>(
        r#"
        SELECT reservations.id AS reservation_id,
               reservations.guest_id,
               reservations.start_date,
               reservations.end_date,
               properties.id AS property_id,
               properties.title,
               properties.cost_per_night,
               properties.thumbnail_photo_url,
               properties.cover_photo_url,
               properties.city,
               avg(property_reviews.rating) AS average_rating
        FROM reservations
        JOIN properties ON reservations.property_id = properties.id
        JOIN property_reviews ON properties.id = property_reviews.property_id
        WHERE reservations.guest_id = $1
        GROUP BY properties.id, reservations.id
        ORDER BY reservations.start_date
        LIMIT $2
        "#,
    )
    .bind(guest_id)
    .bind(limit)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL");
        PgPool::connect(&url).await.expect("connect")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn respects_limit_and_start_date_order() {
        let db = pool().await;
        let rows = list_for_guest(&db, 1, 3).await.expect("list reservations");
        assert!(rows.len() <= 3);
        assert!(rows
            .windows(2)
            .all(|w| w[0].start_date <= w[1].start_date));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_guest_gets_empty_list() {
        let db = pool().await;
        let rows = list_for_guest(&db, i32::MAX, 10)
            .await
            .expect("list reservations");
        assert!(rows.is_empty());
    }
}

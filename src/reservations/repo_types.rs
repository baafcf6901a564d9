use serde::Serialize;
use sqlx::types::Decimal;
use sqlx::FromRow;
use time::Date;

/// A guest's reservation joined with its property and the property's review
/// aggregate. Columns are named explicitly because reservations and
/// properties both carry an `id`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GuestReservation {
    pub reservation_id: i32,
    pub guest_id: i32,
    pub start_date: Date,
    pub end_date: Date,
    pub property_id: i32,
    pub title: Option<String>,
    pub cost_per_night: Option<i32>,
    pub thumbnail_photo_url: Option<String>,
    pub cover_photo_url: Option<String>,
    pub city: Option<String>,
    pub average_rating: Option<Decimal>,
}

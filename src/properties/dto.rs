use serde::Deserialize;

use super::search::PropertyFilters;

/// Query parameters for the property search.
#[derive(Debug, Deserialize)]
pub struct ListPropertiesQuery {
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<f64>,
    pub maximum_price_per_night: Option<f64>,
    pub minimum_rating: Option<f64>,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

impl ListPropertiesQuery {
    pub fn filters(&self) -> PropertyFilters {
        PropertyFilters {
            city: self.city.clone(),
            owner_id: self.owner_id,
            minimum_price_per_night: self.minimum_price_per_night,
            maximum_price_per_night: self.maximum_price_per_night,
            minimum_rating: self.minimum_rating,
        }
    }
}

/// Body for property creation. Absent fields are stored as NULL.
#[derive(Debug, Deserialize)]
pub struct NewProperty {
    pub owner_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_photo_url: Option<String>,
    pub cover_photo_url: Option<String>,
    /// Dollars; persisted as integer cents.
    pub cost_per_night: Option<f64>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub post_code: Option<String>,
    pub country: Option<String>,
    pub parking_spaces: Option<i32>,
    pub number_of_bathrooms: Option<i32>,
    pub number_of_bedrooms: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_to_ten() {
        let q: ListPropertiesQuery = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(q.limit, 10);
        assert!(q.city.is_none());
    }

    #[test]
    fn sparse_body_deserializes() {
        let p: NewProperty = serde_json::from_value(serde_json::json!({
            "title": "Seaside loft",
            "cost_per_night": 100.0
        }))
        .unwrap();
        assert_eq!(p.title.as_deref(), Some("Seaside loft"));
        assert!(p.owner_id.is_none());
        assert!(p.street.is_none());
    }
}

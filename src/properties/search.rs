use sqlx::{Postgres, QueryBuilder};

/// Optional filters for the property search. A `None` field contributes no
/// clause to the statement.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilters {
    /// Wrapped in quote characters by the caller; matched as a substring.
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    /// Dollars; compared against the cents column.
    pub minimum_price_per_night: Option<f64>,
    /// Dollars; compared against the cents column.
    pub maximum_price_per_night: Option<f64>,
    pub minimum_rating: Option<f64>,
}

const BASE_SELECT: &str = "SELECT properties.*, avg(property_reviews.rating) AS average_rating \
                           FROM properties \
                           JOIN property_reviews ON properties.id = property_reviews.property_id";

/// Statement under construction, with the WHERE/AND choice kept as explicit
/// state: the first condition emits `WHERE`, every later one emits `AND`.
struct ConditionalQuery<'args> {
    qb: QueryBuilder<'args, Postgres>,
    has_where: bool,
}

impl<'args> ConditionalQuery<'args> {
    fn new(base: &str) -> Self {
        Self {
            qb: QueryBuilder::new(base),
            has_where: false,
        }
    }

    /// Open the next condition and return the builder for its bound value.
    fn condition(&mut self, sql: &str) -> &mut QueryBuilder<'args, Postgres> {
        if self.has_where {
            self.qb.push(" AND ");
        } else {
            self.qb.push(" WHERE ");
            self.has_where = true;
        }
        self.qb.push(sql)
    }

    fn push(&mut self, sql: &str) -> &mut QueryBuilder<'args, Postgres> {
        self.qb.push(sql)
    }

    fn into_inner(self) -> QueryBuilder<'args, Postgres> {
        self.qb
    }
}

/// Assemble the property search statement.
///
/// Conditions are evaluated in a fixed order (city, owner, price floor, price
/// ceiling), then the review grouping, the optional rating threshold, and the
/// ordering and limit. Every value is bound as a positional parameter.
pub(crate) fn build_search(
    filters: &PropertyFilters,
    limit: i64,
) -> QueryBuilder<'static, Postgres> {
    let mut q = ConditionalQuery::new(BASE_SELECT);

    if let Some(city) = &filters.city {
        q.condition("properties.city LIKE ")
            .push_bind(city_like_pattern(city));
    }
    if let Some(owner_id) = filters.owner_id {
        q.condition("properties.owner_id = ").push_bind(owner_id);
    }
    if let Some(min) = filters.minimum_price_per_night {
        q.condition("properties.cost_per_night >= ")
            .push_bind(dollars_to_cents(min));
    }
    if let Some(max) = filters.maximum_price_per_night {
        q.condition("properties.cost_per_night <= ")
            .push_bind(dollars_to_cents(max));
    }

    q.push(" GROUP BY properties.id, property_reviews.property_id");

    if let Some(rating) = filters.minimum_rating {
        q.push(" HAVING avg(property_reviews.rating) >= ")
            .push_bind(rating);
    }

    q.push(" ORDER BY properties.cost_per_night ASC LIMIT ")
        .push_bind(limit);

    q.into_inner()
}

/// Dollars to the integer cents `cost_per_night` stores.
pub(crate) fn dollars_to_cents(dollars: f64) -> i32 {
    (dollars * 100.0).round() as i32
}

/// Callers supply the city wrapped in quote characters; drop one character
/// from each end and wrap the remainder in wildcards.
pub(crate) fn city_like_pattern(raw: &str) -> String {
    let len = raw.chars().count();
    let inner: String = raw.chars().skip(1).take(len.saturating_sub(2)).collect();
    format!("%{inner}%")
}

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReservationsQuery {
    pub guest_id: i32,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Room {
    pub id: i64,
    pub category_id: i64,
    pub price_per_night: f64,
    pub is_booked: bool,
    pub slug: String,
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Active-occupancy record. Its presence is what makes a room occupied;
/// `Room.is_booked` is only ever written in the same transaction.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct CheckIn {
    pub id: i64,
    pub room_id: i64,
    pub guest_id: i64,
    pub phone_number: String,
    pub email: String,
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub room_id: i64,
    pub guest_id: i64,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBooking {
    pub room: i64,
    #[validate(length(min = 1, message = "phone number must not be empty"))]
    pub phone_number: String,
    #[validate(email)]
    pub email: String,
}

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;
use validator::Validate;

use crate::auth::AuthedUser;
use crate::error::ApiError;
use crate::models::booking::{Booking, CreateBooking};
use crate::models::checkin::CheckIn;
use crate::models::room::Room;

/// Start a stay: flip the room to booked, create the check-in, record
/// the booking. All three writes share one transaction, and the flag
/// flip is a compare-and-swap, so two concurrent requests for the same
/// vacant room cannot both win.
pub async fn create_booking(
    pool: web::Data<SqlitePool>,
    user: AuthedUser,
    body: web::Json<CreateBooking>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let mut tx = pool.begin().await?;

    let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = ?")
        .bind(body.room)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(ApiError::NotFound("Room"))?;

    let claimed = sqlx::query("UPDATE rooms SET is_booked = 1 WHERE id = ? AND is_booked = 0")
        .bind(room.id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    // Losing the claim is a normal response, not an error status.
    if claimed == 0 {
        return Ok(HttpResponse::Ok().json(serde_json::json!({
            "response": "Room is already booked"
        })));
    }

    sqlx::query("INSERT INTO checkins (room_id, guest_id, phone_number, email) VALUES (?, ?, ?, ?)")
        .bind(room.id)
        .bind(user.0.id)
        .bind(&body.phone_number)
        .bind(&body.email)
        .execute(&mut *tx)
        .await?;

    let booking = sqlx::query_as::<_, Booking>(
        "INSERT INTO bookings (room_id, guest_id) VALUES (?, ?) RETURNING *",
    )
    .bind(room.id)
    .bind(user.0.id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    log::info!("room {} booked by user {}", room.id, user.0.id);

    Ok(HttpResponse::Created().json(serde_json::json!({
        "data": booking,
        "response": "Room is successfully booked"
    })))
}

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub pk: i64,
}

/// End a stay: clear the booked flag and delete the check-in row, in
/// one transaction. The booking row stays as a historical record.
pub async fn checkout(
    pool: web::Data<SqlitePool>,
    body: web::Json<CheckoutRequest>,
) -> Result<HttpResponse, ApiError> {
    let mut tx = pool.begin().await?;

    let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = ?")
        .bind(body.pk)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(ApiError::NotFound("Room"))?;

    let checkin = sqlx::query_as::<_, CheckIn>("SELECT * FROM checkins WHERE room_id = ?")
        .bind(room.id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(ApiError::NoActiveStay)?;

    sqlx::query("UPDATE rooms SET is_booked = 0 WHERE id = ?")
        .bind(room.id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM checkins WHERE id = ?")
        .bind(checkin.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    log::info!("room {} checked out", room.id);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "response": "Checkout Successful"
    })))
}

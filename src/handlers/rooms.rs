use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::models::room::Room;

#[derive(Debug, Deserialize)]
pub struct RoomFilter {
    pub category: Option<i64>,
    /// Inclusive upper bound on price_per_night.
    pub price: Option<f64>,
    pub is_booked: Option<bool>,
}

async fn fetch_rooms(
    pool: &SqlitePool,
    category: Option<i64>,
    price: Option<f64>,
    is_booked: Option<bool>,
) -> Result<Vec<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        r#"
        SELECT * FROM rooms
        WHERE (?1 IS NULL OR category_id = ?1)
          AND (?2 IS NULL OR price_per_night <= ?2)
          AND (?3 IS NULL OR is_booked = ?3)
        ORDER BY id DESC
        "#,
    )
    .bind(category)
    .bind(price)
    .bind(is_booked)
    .fetch_all(pool)
    .await
}

pub async fn list_rooms(
    pool: web::Data<SqlitePool>,
    params: web::Query<RoomFilter>,
) -> Result<HttpResponse, ApiError> {
    let rooms = fetch_rooms(&pool, params.category, params.price, params.is_booked).await?;
    Ok(HttpResponse::Ok().json(rooms))
}

pub async fn list_rooms_in_category(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    params: web::Query<RoomFilter>,
) -> Result<HttpResponse, ApiError> {
    let cat_id = path.into_inner();
    let rooms = fetch_rooms(&pool, Some(cat_id), params.price, params.is_booked).await?;
    Ok(HttpResponse::Ok().json(rooms))
}

pub async fn get_room_by_slug(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let slug = path.into_inner();

    let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE slug = ?")
        .bind(&slug)
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or(ApiError::NotFound("Room"))?;

    Ok(HttpResponse::Ok().json(room))
}

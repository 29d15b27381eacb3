use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::auth::AdminUser;
use crate::error::ApiError;
use crate::models::checkin::CheckIn;

pub async fn list_checkins(
    pool: web::Data<SqlitePool>,
    _admin: AdminUser,
) -> Result<HttpResponse, ApiError> {
    let checkins = sqlx::query_as::<_, CheckIn>("SELECT * FROM checkins ORDER BY id DESC")
        .fetch_all(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok().json(checkins))
}

use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::models::user::User;

/// Any user with a valid bearer token.
#[derive(Debug)]
pub struct AuthedUser(pub User);

/// A valid bearer token whose user has the admin flag set.
#[derive(Debug)]
pub struct AdminUser(pub User);

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl FromRequest for AuthedUser {
    type Error = ApiError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let pool = req.app_data::<web::Data<SqlitePool>>().cloned();
        let token = bearer_token(req).map(str::to_owned);

        Box::pin(async move {
            let pool = pool.ok_or(ApiError::Internal)?;
            let token = token.ok_or(ApiError::Unauthorized)?;

            sqlx::query_as::<_, User>("SELECT * FROM users WHERE token = ?")
                .bind(&token)
                .fetch_optional(pool.get_ref())
                .await?
                .map(AuthedUser)
                .ok_or(ApiError::Unauthorized)
        })
    }
}

impl FromRequest for AdminUser {
    type Error = ApiError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let authed = AuthedUser::from_request(req, payload);

        Box::pin(async move {
            let AuthedUser(user) = authed.await?;
            if user.is_admin {
                Ok(AdminUser(user))
            } else {
                Err(ApiError::Forbidden)
            }
        })
    }
}

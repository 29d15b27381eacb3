use actix_web::web;

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

/// Route table. Room queries are public, booking requires a bearer
/// token, the check-in listing requires an admin token.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rooms")
            .route("/", web::get().to(handlers::rooms::list_rooms))
            .route(
                "/category/{cat_id}/",
                web::get().to(handlers::rooms::list_rooms_in_category),
            )
            .route("/{room_slug}/", web::get().to(handlers::rooms::get_room_by_slug)),
    )
    .route("/bookings/", web::post().to(handlers::bookings::create_booking))
    .route("/checkout/", web::post().to(handlers::bookings::checkout))
    .route("/checkins/", web::get().to(handlers::checkins::list_checkins));
}

pub mod bookings;
pub mod checkins;
pub mod rooms;

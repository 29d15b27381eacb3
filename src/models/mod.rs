pub mod booking;
pub mod checkin;
pub mod room;
pub mod user;

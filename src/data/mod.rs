pub mod api;
pub mod backend;
pub mod flow;
pub mod shared_booking;

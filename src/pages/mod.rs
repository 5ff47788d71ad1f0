pub mod confirmation;
pub mod court_card;
pub mod details;
pub mod home;
pub mod outcome;
pub mod payment;
pub mod schedule;
pub mod summary;

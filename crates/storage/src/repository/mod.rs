pub mod analytics;
pub mod booking;
pub mod class;
pub mod member;
pub mod trainer;
pub mod workout;

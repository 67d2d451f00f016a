pub mod calendar;
pub mod monthly;
pub mod sessions;

pub mod api;
pub mod footballers;
pub mod gameweeks;
pub mod health;

pub mod calculator;
pub mod health;
pub mod home;
pub mod metrics;

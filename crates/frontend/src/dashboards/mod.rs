pub mod analytics;
pub mod home;

pub mod analytics;
pub mod response;
pub mod score;

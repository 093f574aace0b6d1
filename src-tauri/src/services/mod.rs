pub mod analytics_service;
pub mod survey_service;

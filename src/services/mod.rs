pub mod database;
pub mod templates;

pub mod commands;
pub mod queries;
pub mod service;

pub use service::ArticleService;

pub mod auth;
pub mod config;
pub mod contact;
pub mod content;
pub mod errors;
pub mod handlers;
pub mod i18n;
pub mod services;
pub mod templates_structs;

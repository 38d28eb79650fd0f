pub mod auth;
pub mod data;
pub mod goals;
pub mod i18n;

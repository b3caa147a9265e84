pub mod audit;
pub mod auth;
pub mod logs;
pub mod notifications;
pub mod pages;
pub mod users;

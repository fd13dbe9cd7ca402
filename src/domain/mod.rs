pub mod auth;
pub mod health;
pub mod member;
pub mod party;
pub mod post;
pub mod town;

pub mod apply_service;
pub mod comment_service;
pub mod dto;
pub mod entity;
pub mod handler;
pub mod like_service;
pub mod service;

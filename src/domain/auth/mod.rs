pub mod dto;
pub mod handler;
pub mod provider;
pub mod service;

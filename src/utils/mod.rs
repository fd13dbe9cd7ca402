pub mod auth;
pub mod cookie;
pub mod error;
pub mod file;
pub mod jwt;
pub mod page;
pub mod response;

pub use response::BaseResponse;
#[allow(unused_imports)]
pub use response::ErrorResponse;

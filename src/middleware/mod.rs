pub mod cache;
pub mod response;

pub use cache::no_store;
pub use response::{ApiResponse, ApiResult};

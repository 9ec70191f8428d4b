pub use errors::{ServiceError, ServiceResult};

pub mod advertisements;
pub mod errors;

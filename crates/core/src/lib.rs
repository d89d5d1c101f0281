pub mod headers;
pub mod service;

mod error;

pub use error::ServiceError;
pub use headers::HeaderStore;
pub use service::BaseService;

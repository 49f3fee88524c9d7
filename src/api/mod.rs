pub mod client;
pub mod error;
pub mod token;
pub mod transport;

pub use client::{resolve_url, ActionClient};
pub use error::{ApiError, ErrorClass};
pub use token::resolve_token;
pub use transport::{ApiResult, HttpTransport, RawResponse, Transport, CSRF_HEADER};

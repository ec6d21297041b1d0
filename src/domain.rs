// Domain layer modules
pub mod registration_request;
pub mod registration_response;
pub mod user_record;

// Re-exports
pub use registration_request::{RegistrationRequest, RequestParseError};
pub use registration_response::{REGISTERED_MESSAGE, RegistrationResponse};
pub use user_record::{
    DEFAULT_EMAIL, DEFAULT_NAME, UserRecord, email_or_default, name_or_default,
};

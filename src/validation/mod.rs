pub mod classifier;
pub mod endpoint;
pub mod validator;

pub use classifier::{ResponseClass, classify_response};
pub use endpoint::{DEFAULT_ENDPOINT, decode_endpoint};
pub use validator::{CredentialValidator, ValidationOutcome};

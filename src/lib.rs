pub mod core;
pub mod validation;

pub use crate::core::*;
pub use validation::{
    CredentialValidator, ResponseClass, ValidationOutcome, classify_response, decode_endpoint,
};

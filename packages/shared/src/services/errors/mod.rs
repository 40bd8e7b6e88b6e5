pub mod token_service_errors;
pub mod token_verification_errors;

pub mod response_common;
pub mod token_auth;

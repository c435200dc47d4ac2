pub mod request_common;
pub mod sites_manager;
pub mod users_manager;

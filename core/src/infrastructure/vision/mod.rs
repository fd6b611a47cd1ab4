pub mod google_vision;
pub mod service_account;

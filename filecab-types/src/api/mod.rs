pub mod response;
pub mod v1;

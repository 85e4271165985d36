pub mod daily;
pub mod upload;

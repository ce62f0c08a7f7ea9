pub mod client;
pub mod method;
pub mod render;
pub mod request;
pub mod response;

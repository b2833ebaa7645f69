pub mod board;
pub mod clock;
pub mod feed;
pub mod log;
pub mod service;
pub mod store;
pub mod validator;

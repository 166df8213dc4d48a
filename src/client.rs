pub mod api;
pub mod form;
pub mod http;
pub mod local;
pub mod manager;

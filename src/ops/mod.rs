pub mod controller;
pub mod display;
pub mod store;
pub mod view_filter;

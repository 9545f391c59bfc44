pub mod billing;
pub mod booking;
pub mod desk;
pub mod engine;
pub mod guest;
pub mod ids;
pub mod limits;
pub mod model;
pub mod observability;
pub mod service;

pub mod entities;
pub mod listing;
pub mod ports;
pub mod services;
pub mod value_objects;

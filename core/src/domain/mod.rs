pub mod category;
pub mod common;
pub mod health;
pub mod location;
pub mod pagination;
pub mod room;

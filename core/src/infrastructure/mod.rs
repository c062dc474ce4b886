pub mod category;
pub mod db;
pub mod health;
pub mod location;
pub mod pagination;
pub mod room;

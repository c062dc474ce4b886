pub mod category;
pub mod health;
pub mod location;
pub mod query_extractor;
pub mod query_params;
pub mod room;
pub mod server;

//! Core business logic for Coniven: inventory resources (categories,
//! locations, rooms), the listing query assembler shared by them, and the
//! PostgreSQL adapters.

pub mod application;
pub mod domain;
pub mod entity;
pub mod infrastructure;

pub mod mappers;
pub mod repositories;

pub use repositories::location_repository::PostgresLocationRepository;

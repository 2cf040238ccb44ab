pub mod connection;
pub mod repository;

pub use connection::{run_scoped, CatalogDb};
pub use repository::CatalogRepository;

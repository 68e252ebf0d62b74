pub mod repository;

pub use repository::SqliteDealRepository;

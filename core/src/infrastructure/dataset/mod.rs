pub mod loader;
pub mod repository;

pub use loader::{load_dataset, parse_jsonl};
pub use repository::InMemoryRestaurantRepository;

pub mod get_cuisines;
pub mod get_dataset_metadata;
pub mod get_restaurants;

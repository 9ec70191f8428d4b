pub mod advertisement;
pub mod category_key;
pub mod media;
pub mod types;

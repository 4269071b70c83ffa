pub mod mongo;
pub mod repository;

pub use mongo::MongoDogStore;
pub use repository::DogStore;

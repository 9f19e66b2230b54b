pub mod cupcake_service;
pub mod errors;
pub mod repository;
pub mod storage;
pub mod story;

mod test_support;

pub mod read_service;
pub mod seed_service;
pub mod setup_service;
pub mod write_service;

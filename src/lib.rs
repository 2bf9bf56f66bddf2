pub mod cli;
pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod faker;
pub mod models;
pub mod response;
pub mod routes;
pub mod sampler;
pub mod services;
pub mod state;
pub mod store;

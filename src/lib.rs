pub mod availability;
pub mod catalog;
pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod migration;
pub mod models;
pub mod reference;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

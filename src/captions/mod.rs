pub mod catalog;
pub mod controller;
pub mod repo;
pub mod repo_types;
pub mod services;

// src/presentation/http/controllers/mod.rs
pub mod branches;
pub mod directory;
pub mod sitemap;

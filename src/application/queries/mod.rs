pub mod branches;
pub mod sitemap;

//! # feed-personalizer
//!
//! Personalized product feed for shoppers across regions and languages.
//!
//! A [`PreferenceProfile`](models::PreferenceProfile) (region, preferred
//! language, liked categories, budget, search text) is matched against a
//! [`Catalog`](services::Catalog). The ranking pipeline drops products over
//! budget or outside the search term, scores the rest
//! (region +10, exact language +8, same base language +4, liked category +6),
//! keeps those scoring at least 6 and orders them by score.
//!
//! ```rust,no_run
//! use feed_personalizer::models::PreferenceProfile;
//! use feed_personalizer::services::{rank, Catalog};
//!
//! let catalog = Catalog::embedded().unwrap();
//! let profile = PreferenceProfile::new("Delhi", "hi-IN", 2000);
//!
//! for item in rank(&profile, catalog.products()) {
//!     println!("{} ({} points)", item.product.name, item.score);
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

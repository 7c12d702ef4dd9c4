//! Reel Core
//!
//! Catalog types, traits, and error handling shared by every Reel crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Video`, `VideoId`
//! - **Core Traits**: `VideoCatalog`, the read-only lookup seam the playback
//!   session depends on
//! - **Catalog**: `InMemoryCatalog`, plus a loader for the line-oriented
//!   `title | id | tags` catalog format
//! - **Error Handling**: `CatalogError` and its `Result` alias
//!
//! # Example
//!
//! ```rust
//! use reel_core::{InMemoryCatalog, VideoCatalog, VideoId};
//!
//! let catalog = InMemoryCatalog::parse(
//!     "Amazing Cats | amazing_cats_video_id | #cat , #animal\n",
//! )
//! .unwrap();
//!
//! let video = catalog.get(&VideoId::new("amazing_cats_video_id")).unwrap();
//! assert_eq!(video.title, "Amazing Cats");
//! assert_eq!(video.tags, vec!["#cat", "#animal"]);
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod traits;
pub mod types;

pub use catalog::InMemoryCatalog;
pub use error::{CatalogError, Result};
pub use traits::VideoCatalog;
pub use types::{Video, VideoId};

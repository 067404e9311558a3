//! # kwix - Keyword Index and Search
//!
//! kwix builds an in-memory inverted index over a small, explicitly
//! listed document corpus and answers two-keyword searches with the five
//! documents where the keywords occur most often.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`corpus`] - The document list, stop words, and document sources
//! - [`index`] - Index types, ranked insertion, and the build pipeline
//! - [`query`] - Frequency-ranked two-keyword search
//! - [`output`] - Result formatting for the terminal
//! - [`utils`] - Keyword classification and progress reporting
//!
//! ## Quick Start
//!
//! ```ignore
//! use kwix::index::build::build_index;
//! use kwix::query::top5;
//! use std::path::Path;
//!
//! let index = build_index(
//!     Path::new("corpus/docs.txt"),
//!     Path::new("corpus/stopwords.txt"),
//!     Path::new("corpus"),
//! ).unwrap();
//!
//! for name in top5(&index, "storm", "sea") {
//!     println!("{}", name);
//! }
//! ```
//!
//! ## How ranking works
//!
//! Every keyword's posting list is kept sorted by descending in-document
//! frequency as documents merge in. A search walks two posting lists like
//! a merge, consuming the higher-frequency head (ties prefer the first
//! keyword) and reporting each document once, so the best five fall out
//! without scoring or sorting at query time.

pub mod corpus;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;

//! arXiv API access: query client and Atom feed parsing

pub mod client;
pub mod feed;

pub use client::{ArxivClient, PaperSource};
pub use feed::parse_feed;

//! The mention pipeline: extract, fetch, summarize, deliver

pub mod deliver;
pub mod summarize;

pub use deliver::deliver_reply;
pub use summarize::handle_arxiv_request;

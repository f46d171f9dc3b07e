//! Crawler module for fetching page titles
//!
//! This module contains the fetch-and-extract pipeline, including:
//! - HTTP fetching with timeout and charset-aware decoding
//! - Title extraction from HTML
//! - Per-URL error classification into records
//! - Bounded-parallel, order-preserving dispatch

mod dispatcher;
mod fetcher;
mod parser;
mod title;

pub use dispatcher::{
    progress_line, run, ConsoleProgress, Dispatcher, Progress, SilentProgress,
    DEFAULT_MAX_WORKERS,
};
pub use fetcher::{
    build_http_client, FetchError, FetchedPage, HttpPageSource, PageSource, DEFAULT_CHARSET,
};
pub use parser::extract_title;
pub use title::{FetchTitle, TitleFetcher};

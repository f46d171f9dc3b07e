//! Per-URL outcome records
//!
//! Every input URL produces exactly one [`TitleRecord`], whether the fetch
//! succeeded or not. Records are built once and never mutated.

mod status;
mod title_record;

pub use status::FetchStatus;
pub use title_record::{TitleRecord, FETCH_FAILED_TITLE, NO_TITLE};

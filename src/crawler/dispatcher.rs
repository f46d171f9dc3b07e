//! Bounded-parallel dispatch of title fetches
//!
//! This module runs a fetcher over a list of URLs with a fixed number of
//! workers and returns the records in input order:
//! - A work queue of `(index, url)` pairs is drained by the workers
//! - Each worker writes its record into the slot at that index
//! - Progress is reported as each record lands, in completion order

use crate::crawler::fetcher::FetchError;
use crate::crawler::title::FetchTitle;
use crate::record::TitleRecord;
use crate::url::{domain_of_str, ensure_scheme};
use std::collections::VecDeque;
use std::sync::{Arc, OnceLock};
use tokio::sync::Mutex;
use tokio::task::JoinSet;

/// Number of workers used when the caller does not choose
pub const DEFAULT_MAX_WORKERS: usize = 10;

type WorkQueue = Arc<Mutex<VecDeque<(usize, String)>>>;
type Slots = Arc<Vec<OnceLock<TitleRecord>>>;

/// Receives each record as soon as its fetch completes
pub trait Progress: Send + Sync + 'static {
    fn record_done(&self, index: usize, record: &TitleRecord);
}

/// Prints one line per completed fetch to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn record_done(&self, _index: usize, record: &TitleRecord) {
        println!("{}", progress_line(record));
    }
}

/// Discards progress
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn record_done(&self, _index: usize, _record: &TitleRecord) {}
}

/// Formats the console line for a completed fetch
pub fn progress_line(record: &TitleRecord) -> String {
    format!(
        "Processed: {} - {} - {}",
        record.url(),
        record.status().glyph(),
        record.title()
    )
}

/// Runs a fetcher over many URLs with a bounded worker pool
///
/// The dispatcher holds no state between runs; the fetch capability and
/// progress sink are injected.
pub struct Dispatcher<F, P = ConsoleProgress> {
    fetcher: Arc<F>,
    progress: Arc<P>,
    max_workers: usize,
}

impl<F: FetchTitle> Dispatcher<F, ConsoleProgress> {
    /// Creates a dispatcher that prints progress to the console
    ///
    /// A `max_workers` of zero is treated as one.
    pub fn new(fetcher: F, max_workers: usize) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            progress: Arc::new(ConsoleProgress),
            max_workers: max_workers.max(1),
        }
    }
}

impl<F: FetchTitle, P: Progress> Dispatcher<F, P> {
    /// Replaces the progress sink
    pub fn with_progress<Q: Progress>(self, progress: Q) -> Dispatcher<F, Q> {
        Dispatcher {
            fetcher: self.fetcher,
            progress: Arc::new(progress),
            max_workers: self.max_workers,
        }
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Fetches every URL and returns one record per input position
    ///
    /// # Guarantees
    ///
    /// - `result.len() == urls.len()` and `result[i]` belongs to `urls[i]`
    /// - At most `max_workers` fetches are in flight at once
    /// - Duplicate URLs are fetched once per occurrence
    /// - A failing or panicking fetch only affects its own slot
    pub async fn run(&self, urls: &[String]) -> Vec<TitleRecord> {
        if urls.is_empty() {
            return Vec::new();
        }

        let queue: WorkQueue = Arc::new(Mutex::new(
            urls.iter().cloned().enumerate().collect::<VecDeque<_>>(),
        ));
        let slots: Slots = Arc::new((0..urls.len()).map(|_| OnceLock::new()).collect());

        let worker_count = self.max_workers.min(urls.len());
        tracing::debug!(
            "Dispatching {} URLs across {} workers",
            urls.len(),
            worker_count
        );

        let mut workers = JoinSet::new();
        for worker_id in 0..worker_count {
            workers.spawn(drain_queue(
                worker_id,
                Arc::clone(&queue),
                Arc::clone(&slots),
                Arc::clone(&self.fetcher),
                Arc::clone(&self.progress),
            ));
        }

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Worker task failed: {}", e);
            }
        }

        collect_slots(slots, urls)
    }
}

/// Runs a fetcher over `urls` with console progress
///
/// # Example
///
/// ```no_run
/// use title_sweep::config::FetchConfig;
/// use title_sweep::crawler::{run, TitleFetcher};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = TitleFetcher::from_config(&FetchConfig::default())?;
/// let urls = vec!["example.com".to_string(), "https://www.rust-lang.org".to_string()];
/// let records = run(&urls, 10, fetcher).await;
/// assert_eq!(records.len(), urls.len());
/// # Ok(())
/// # }
/// ```
pub async fn run<F: FetchTitle>(urls: &[String], max_workers: usize, fetcher: F) -> Vec<TitleRecord> {
    Dispatcher::new(fetcher, max_workers).run(urls).await
}

/// Worker loop: pop, fetch, report, store, until the queue is empty
async fn drain_queue<F: FetchTitle, P: Progress>(
    worker_id: usize,
    queue: WorkQueue,
    slots: Slots,
    fetcher: Arc<F>,
    progress: Arc<P>,
) {
    let mut handled = 0usize;

    loop {
        let next = queue.lock().await.pop_front();
        let Some((index, raw_url)) = next else {
            break;
        };

        let record = fetch_isolated(Arc::clone(&fetcher), raw_url).await;
        progress.record_done(index, &record);

        if slots[index].set(record).is_err() {
            tracing::warn!("Slot {} was already filled; keeping the first record", index);
        }
        handled += 1;
    }

    tracing::trace!("Worker {} finished after {} URLs", worker_id, handled);
}

/// Runs one fetch in its own task so a panic cannot take the worker down
async fn fetch_isolated<F: FetchTitle>(fetcher: Arc<F>, raw_url: String) -> TitleRecord {
    let task_url = raw_url.clone();
    let task = tokio::spawn(async move { fetcher.fetch(&task_url).await });

    match task.await {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!("Fetch task for {} aborted: {}", raw_url, e);
            unexpected_record(&raw_url, format!("fetch task aborted: {}", e))
        }
    }
}

/// Converts the filled slots into the ordered result
fn collect_slots(slots: Slots, urls: &[String]) -> Vec<TitleRecord> {
    let slots = Arc::try_unwrap(slots).unwrap_or_else(|shared| shared.iter().cloned().collect());

    slots
        .into_iter()
        .zip(urls)
        .enumerate()
        .map(|(index, (slot, raw_url))| {
            slot.into_inner().unwrap_or_else(|| {
                tracing::warn!("No record for slot {} ({})", index, raw_url);
                unexpected_record(raw_url, "worker stopped before this URL completed".to_string())
            })
        })
        .collect()
}

fn unexpected_record(raw_url: &str, reason: String) -> TitleRecord {
    let url = ensure_scheme(raw_url);
    let domain = domain_of_str(&url);
    TitleRecord::failure(url, domain, &FetchError::Unexpected(reason))
}

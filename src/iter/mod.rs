//! Lazy result iterator
//!
//! [`ResultIter`] presents a single-item, pull-based view over a result
//! set that is paginated remotely. Pages are fetched on demand in
//! increasing page order, buffered, and yielded one item at a time, so
//! callers never manage page numbers.
//!
//! A fetch failure does not panic or bubble an error out of `next()`:
//! long scans prefer graceful truncation, so the sequence simply ends
//! early and the failure stays inspectable via [`ResultIter::last_error`].

use crate::client::Transport;
use crate::error::{Error, Result};
use crate::query::Query;
use crate::resource::{FieldSelector, PageRequest, ResourceAdapter};
use crate::types::{JsonValue, SortBy, SortOrder};
use futures::Stream;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, warn};

/// Pull-based iterator over a remotely paginated result set
///
/// Forward-only and not restartable: build a fresh iterator to scan the
/// same query again. One consumer at a time; `next()` blocks the caller
/// for at most one network round trip and holds no locks.
pub struct ResultIter {
    transport: Arc<dyn Transport>,
    query: Query,
    adapter: &'static dyn ResourceAdapter,

    // fetch parameters
    sort_by: SortBy,
    sort_order: SortOrder,
    fields: FieldSelector,
    max_items: Option<usize>,

    // iteration state
    current_page: u32,
    total_pages: Option<u64>,
    total_results: Option<u64>,
    buffer: VecDeque<JsonValue>,
    yielded: usize,
    pages_fetched: u32,
    done: bool,
    last_error: Option<Error>,
}

impl ResultIter {
    /// Bind an iterator to a transport and a query
    ///
    /// Performs no network call. Sorting, fields and the item cap default
    /// to date-descending, server-default fields, unbounded.
    pub fn new(transport: Arc<dyn Transport>, query: Query) -> Self {
        let adapter = query.kind().adapter();
        Self {
            transport,
            query,
            adapter,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            fields: FieldSelector::default(),
            max_items: None,
            current_page: 0,
            total_pages: None,
            total_results: None,
            buffer: VecDeque::new(),
            yielded: 0,
            pages_fetched: 0,
            done: false,
            last_error: None,
        }
    }

    /// Set the sort key
    #[must_use]
    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Set the sort direction
    #[must_use]
    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Set which fields the server should populate on items
    #[must_use]
    pub fn fields(mut self, fields: FieldSelector) -> Self {
        self.fields = fields;
        self
    }

    /// Cap the number of items yielded
    ///
    /// A cap of 0 ends the sequence before any fetch happens.
    #[must_use]
    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Pull the next item, fetching a page if the buffer is empty
    ///
    /// `None` means the result set is exhausted, the cap was reached, or a
    /// fetch failed (check [`last_error`](Self::last_error) to tell the
    /// last two apart).
    pub async fn next(&mut self) -> Option<JsonValue> {
        if let Some(max) = self.max_items {
            if self.yielded >= max {
                return None;
            }
        }

        if self.buffer.is_empty() && !self.done {
            self.fetch_next_page().await;
        }

        match self.buffer.pop_front() {
            Some(item) => {
                self.yielded += 1;
                Some(item)
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    /// Count the items matching the query with one cheap request
    ///
    /// Uses a disposable descriptor (page 1, smallest legal size, minimal
    /// fields); takes `&self`, so an in-progress iteration is untouched.
    pub async fn count(&self) -> Result<u64> {
        let payload = self.query.request_payload(self.adapter.count_descriptor());
        let body = self.transport.execute(self.adapter.endpoint(), payload).await?;
        Ok(self.adapter.read_page(&body)?.total_results)
    }

    /// Drain all remaining items into a vector
    pub async fn collect_all(&mut self) -> Vec<JsonValue> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await {
            items.push(item);
        }
        items
    }

    /// Pull at most `n` further items
    pub async fn take(&mut self, n: usize) -> Vec<JsonValue> {
        let mut items = Vec::with_capacity(n);
        for _ in 0..n {
            match self.next().await {
                Some(item) => items.push(item),
                None => break,
            }
        }
        items
    }

    /// Adapt the iterator into a [`futures::Stream`] of items
    pub fn into_stream(self) -> impl Stream<Item = JsonValue> {
        futures::stream::unfold(self, |mut iter| async move {
            iter.next().await.map(|item| (item, iter))
        })
    }

    /// Total matching items, known after the first page arrives
    pub fn total_results(&self) -> Option<u64> {
        self.total_results
    }

    /// Total pages at the fixed batch size, known after the first page
    pub fn total_pages(&self) -> Option<u64> {
        self.total_pages
    }

    /// Items yielded so far
    pub fn items_yielded(&self) -> usize {
        self.yielded
    }

    /// Pages fetched so far
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// The failure that ended iteration early, if any
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Fetch the next page into the buffer
    ///
    /// On failure the iterator is marked done so a later `next()` cannot
    /// skip past the failed page and resume mid-sequence.
    async fn fetch_next_page(&mut self) {
        self.current_page += 1;

        if let Some(total) = self.total_pages {
            if u64::from(self.current_page) > total {
                self.done = true;
                return;
            }
        }

        let request = PageRequest::new(self.current_page, self.adapter.batch_size())
            .sort_by(self.sort_by.clone())
            .sort_order(self.sort_order)
            .fields(self.fields.clone());

        let descriptor = match self.adapter.descriptor(&request) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                self.done = true;
                self.last_error = Some(e);
                return;
            }
        };

        let payload = self.query.request_payload(descriptor);
        let body = match self.transport.execute(self.adapter.endpoint(), payload).await {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    "Fetching {} page {} failed, ending iteration early: {e}",
                    self.adapter.result_key(),
                    self.current_page
                );
                self.done = true;
                self.last_error = Some(e);
                return;
            }
        };

        let page = match self.adapter.read_page(&body) {
            Ok(page) => page,
            Err(e) => {
                warn!(
                    "Reading {} page {} failed, ending iteration early: {e}",
                    self.adapter.result_key(),
                    self.current_page
                );
                self.done = true;
                self.last_error = Some(e);
                return;
            }
        };

        self.pages_fetched += 1;

        // The page count must stay stable across a scan even if the
        // backing dataset shifts, so only the first response sets it.
        if self.total_pages.is_none() {
            self.total_pages = Some(page.pages);
            self.total_results = Some(page.total_results);
        }

        debug!(
            "Fetched {} page {}/{}: {} items",
            self.adapter.result_key(),
            self.current_page,
            self.total_pages.unwrap_or_default(),
            page.results.len()
        );

        self.buffer.extend(page.results);
    }
}

impl std::fmt::Debug for ResultIter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultIter")
            .field("resource", &self.adapter.result_key())
            .field("current_page", &self.current_page)
            .field("total_pages", &self.total_pages)
            .field("buffered", &self.buffer.len())
            .field("yielded", &self.yielded)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

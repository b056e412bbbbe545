//! Paginated iteration over list endpoints.
//!
//! List endpoints return a bounded page envelope `{items, has_more}` and are
//! driven by `page_num`/`page_size` query parameters, with `page_num`
//! starting at 0. This module provides [`PaginatedStream`], a lazy `Stream`
//! that fetches strictly at page boundaries — the consumer never pays for a
//! page it does not reach.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::ClientInner;
use crate::Result;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: i32 = 100;

/// One bounded slice of a list endpoint's results.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    /// The items in this page, in server order.
    pub items: Vec<T>,
    /// Whether further pages exist after this one.
    pub has_more: bool,
}

/// Query parameters added to every page fetch.
#[derive(Serialize)]
pub(crate) struct PageQuery<Q> {
    pub(crate) page_num: i32,
    pub(crate) page_size: i32,
    #[serde(flatten)]
    pub(crate) extra: Option<Q>,
}

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// A stream that lazily fetches pages from a paginated API endpoint.
///
/// The stream yields individual items, fetching the next page only once the
/// current one is exhausted and the consumer asks for more. Dropping the
/// stream early therefore never triggers a fetch for unconsumed pages. A
/// fresh call to the originating service method starts a fresh stream.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
///
/// # async fn example(client: airwallex_rs::AirwallexClient) -> airwallex_rs::Result<()> {
/// let mut stream = client.payments().list_stream(None);
///
/// while let Some(result) = stream.next().await {
///     let payment = result?;
///     println!("{}", payment.id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    /// Function to fetch a page by number.
    fetch_page: Box<dyn Fn(i32) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync>,
    /// Current page of items being yielded.
    current_items: Vec<T>,
    /// Next page number to fetch, None if exhausted.
    next_page_num: Option<i32>,
    /// Page number and future of the in-flight fetch.
    pending_fetch: Option<(i32, BoxFuture<'static, Result<Page<T>>>)>,
}

impl<T> PaginatedStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Create a new paginated stream from a page-fetch function.
    pub fn new<F>(fetch_page: F) -> Self
    where
        F: Fn(i32) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: Vec::new(),
            next_page_num: Some(0),
            pending_fetch: None,
        }
    }
}

impl<T> Stream for PaginatedStream<T>
where
    T: Unpin,
{
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            // Drain the current page before anything else.
            if !this.current_items.is_empty() {
                let item = this.current_items.remove(0);
                return Poll::Ready(Some(Ok(item)));
            }

            // Current page exhausted; advance the in-flight fetch if any.
            if let Some((page_num, fut)) = &mut this.pending_fetch {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        let fetched = *page_num;
                        this.pending_fetch = None;
                        this.current_items = page.items;
                        this.next_page_num = page.has_more.then_some(fetched + 1);
                        // Loop back: yield items, or start the next fetch if
                        // the server sent an empty page with has_more set.
                        if this.current_items.is_empty() && this.next_page_num.is_none() {
                            return Poll::Ready(None);
                        }
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_page_num = None; // Stop on error
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => {
                        return Poll::Pending;
                    }
                }
            }

            // No pending fetch; start one if pages remain.
            if let Some(page_num) = this.next_page_num {
                let fut = (this.fetch_page)(page_num);
                this.pending_fetch = Some((page_num, fut));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

/// Builder wiring a dispatcher path and filters into a [`PaginatedStream`].
pub(crate) struct PaginatedStreamBuilder<T> {
    inner: Arc<ClientInner>,
    path: String,
    page_size: i32,
    _marker: std::marker::PhantomData<T>,
}

impl<T: DeserializeOwned + Unpin + Send + 'static> PaginatedStreamBuilder<T> {
    pub(crate) fn new(inner: Arc<ClientInner>, path: impl Into<String>) -> Self {
        Self {
            inner,
            path: path.into(),
            page_size: DEFAULT_PAGE_SIZE,
            _marker: std::marker::PhantomData,
        }
    }

    /// Set the number of items per page.
    pub(crate) fn page_size(mut self, page_size: i32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Build the stream with optional additional query parameters.
    pub(crate) fn build_with_query<Q>(self, query: Option<Q>) -> PaginatedStream<T>
    where
        Q: Serialize + Clone + Send + Sync + 'static,
    {
        let inner = self.inner;
        let path = self.path;
        let page_size = self.page_size;

        PaginatedStream::new(move |page_num: i32| {
            let inner = inner.clone();
            let path = path.clone();
            let query = query.clone();

            Box::pin(async move {
                let page_query = PageQuery {
                    page_num,
                    page_size,
                    extra: query,
                };

                inner
                    .get_with_query::<Page<T>, _>(&path, &page_query)
                    .await
            })
        })
    }
}

/// A blocking iterator over a paginated endpoint.
///
/// The pull-based twin of [`PaginatedStream`]: identical page-boundary
/// semantics, with the calling thread blocked for the duration of each page
/// fetch instead of suspending.
#[cfg(feature = "blocking")]
pub struct PageIter<T> {
    fetch_page: Box<dyn FnMut(i32) -> Result<Page<T>>>,
    current_items: std::vec::IntoIter<T>,
    next_page_num: Option<i32>,
}

#[cfg(feature = "blocking")]
impl<T> PageIter<T> {
    /// Create a new iterator from a page-fetch function.
    pub fn new<F>(fetch_page: F) -> Self
    where
        F: FnMut(i32) -> Result<Page<T>> + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: Vec::new().into_iter(),
            next_page_num: Some(0),
        }
    }
}

#[cfg(feature = "blocking")]
impl<T> Iterator for PageIter<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current_items.next() {
                return Some(Ok(item));
            }

            let page_num = self.next_page_num?;
            match (self.fetch_page)(page_num) {
                Ok(page) => {
                    self.current_items = page.items.into_iter();
                    self.next_page_num = page.has_more.then_some(page_num + 1);
                }
                Err(e) => {
                    self.next_page_num = None; // Stop on error
                    return Some(Err(e));
                }
            }
        }
    }
}

//! Lazy cursor over a paged listing

use std::collections::VecDeque;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http::Session;

/// Forward-only cursor over the items of a paged listing.
///
/// Created by [`Session::get_all`], pre-loaded with the page-1 results.
/// Pages 2 through the page count are fetched one at a time, each only once
/// the buffered items are exhausted. The final page is included even when it
/// is only partially filled.
///
/// The cursor is finite and not restartable: after the last item (or after a
/// failed page fetch) it keeps returning `None`.
#[derive(Debug)]
pub struct Pages<T> {
    session: Session,
    resource: String,
    query: Vec<(String, String)>,
    buffer: VecDeque<T>,
    next_page: u64,
    page_count: u64,
    done: bool,
}

impl<T: DeserializeOwned> Pages<T> {
    pub(crate) fn new(
        session: Session,
        resource: &str,
        query: &[(String, String)],
        first_results: Vec<T>,
        page_count: u64,
    ) -> Self {
        Self {
            session,
            resource: resource.to_string(),
            query: query.to_vec(),
            buffer: first_results.into(),
            next_page: 2,
            page_count,
            done: false,
        }
    }

    /// Advance to the next item, fetching the next page when the buffer runs
    /// dry.
    ///
    /// A failed page fetch is yielded as `Some(Err(_))` in place of that
    /// page's first item; items from earlier pages have already been yielded
    /// and stay valid. Afterwards the cursor is fused.
    pub async fn next(&mut self) -> Option<Result<T>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Some(Ok(item));
            }
            if self.done || self.next_page > self.page_count {
                self.done = true;
                return None;
            }

            let page = self.next_page;
            self.next_page += 1;
            match self
                .session
                .fetch_page::<T>(&self.resource, &self.query, page)
                .await
            {
                Ok(response) => self.buffer.extend(response.results),
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }

    /// Drain the remaining items into a vector
    ///
    /// # Errors
    /// Returns the first page-fetch error encountered; items yielded before
    /// the failure are dropped.
    pub async fn try_collect(&mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await {
            items.push(item?);
        }
        Ok(items)
    }
}

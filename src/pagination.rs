//! Cursor pagination over collection endpoints.

use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::Arc;

use futures::stream::{self, Stream};

use crate::error::Error;
use crate::http::route::Route;
use crate::http::transport::Transport;
use crate::jsonapi::TypedResource;

/// Cursor-holding iterator over a paginated collection endpoint.
///
/// Forward-only and non-restartable: each [`next_page`](Self::next_page)
/// consumes the cursor the previous page produced, and the only way to
/// start over is to re-issue the original list call. Every page fetch goes
/// through the owning client's transport, so rate limiting applies to all
/// of them.
///
/// # Example
/// ```no_run
/// # use battlemetrics::{Battlemetrics, ServerFilter};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Battlemetrics::new("token")?;
/// let mut pages = client.list_servers(&ServerFilter::default());
///
/// while let Some(servers) = pages.next_page().await? {
///     for server in servers {
///         println!("{}", server.attributes.name);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct Paginator<T> {
    transport: Arc<Transport>,
    cursor: Option<Cursor>,
    _resource: PhantomData<T>,
}

enum Cursor {
    Start(Route),
    Next(String),
}

impl<T: TypedResource> Paginator<T> {
    pub(crate) fn new(transport: Arc<Transport>, route: Route) -> Self {
        Self {
            transport,
            cursor: Some(Cursor::Start(route)),
            _resource: PhantomData,
        }
    }

    /// Whether another page fetch is possible.
    pub fn has_next(&self) -> bool {
        self.cursor.is_some()
    }

    /// Fetch the next page; `None` once the cursor is exhausted.
    ///
    /// Pages are not deduplicated: if the server mutates the collection
    /// between fetches, duplicates or gaps are possible. Cursor stability
    /// is the server's responsibility.
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>, Error> {
        let Some(cursor) = self.cursor.take() else {
            return Ok(None);
        };

        let route = match cursor {
            Cursor::Start(route) => route,
            Cursor::Next(url) => Route::absolute(url),
        };

        let document = self.transport.request_document(route, None).await?;
        self.cursor = document.next_link().map(|url| Cursor::Next(url.to_string()));
        document.decode_many().map(Some)
    }

    /// Adapt into a stream of single resources across page boundaries.
    ///
    /// Items come in page order; a failed page fetch ends the stream with
    /// the error.
    pub fn items(self) -> impl Stream<Item = Result<T, Error>> {
        stream::try_unfold((self, VecDeque::new()), |(mut pager, mut buffered)| async move {
            loop {
                if let Some(item) = buffered.pop_front() {
                    return Ok(Some((item, (pager, buffered))));
                }
                match pager.next_page().await? {
                    Some(page) => buffered = page.into(),
                    None => return Ok(None),
                }
            }
        })
    }
}

//! In-memory pending/all lists of one request category.
//!
//! Lists are only ever replaced wholesale by a successful load. A failed load
//! keeps the previous lists (stale but available) and records an error
//! string for the banner. Nothing here patches a list in place; after a
//! status change the caller reloads.

use std::collections::HashMap;

use lms_client::{Category, Credential, ListKind};
use tracing::{debug, info, warn};

use crate::backend::RequestBackend;
use crate::error::{Result, ReviewError};
use crate::model::{Request, RequestId};
use crate::pagination::page_slice;

const FETCH_CONTEXT: &str = "Error fetching requests";

/// Both lists of a category as one consistent snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestLists {
    pub pending: Vec<Request>,
    pub all: Vec<Request>,
}

impl RequestLists {
    /// Build a snapshot whose pending list is exactly the Pending subset of
    /// `all`.
    ///
    /// The two lists come from separate calls and can disagree if a request
    /// changed in between. `all` wins; the pending endpoint only decides the
    /// order of the rows it knows about.
    pub fn reconcile(pending: Vec<Request>, all: Vec<Request>) -> Self {
        let mut order: HashMap<&RequestId, usize> = HashMap::with_capacity(pending.len());
        for (position, request) in pending.iter().enumerate() {
            order.entry(&request.id).or_insert(position);
        }

        let mut derived: Vec<Request> = all.iter().filter(|r| r.is_pending()).cloned().collect();
        derived.sort_by_key(|r| order.get(&r.id).copied().unwrap_or(usize::MAX));

        let consistent = derived.len() == pending.len()
            && derived.iter().zip(&pending).all(|(a, b)| a.id == b.id);
        if !consistent {
            warn!(
                reported = pending.len(),
                derived = derived.len(),
                "Pending list disagreed with full list, using full list"
            );
        }

        Self {
            pending: derived,
            all,
        }
    }
}

/// Fetch both lists of `category` concurrently.
///
/// Fails fast: the first error wins and no partial result is returned. A
/// missing credential fails before anything is sent.
pub async fn fetch_lists<B>(
    backend: &B,
    category: Category,
    credential: Option<&Credential>,
) -> Result<RequestLists>
where
    B: RequestBackend + ?Sized,
{
    let credential = credential.ok_or(ReviewError::MissingCredential)?;

    let (pending, all) = futures::try_join!(
        backend.fetch_requests(credential, category, ListKind::Pending),
        backend.fetch_requests(credential, category, ListKind::All),
    )?;

    Ok(RequestLists::reconcile(pending, all))
}

/// Handle for one in-flight load, returned by [`RequestStore::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Pending and all lists of one category plus load state.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestStore {
    category: Category,
    lists: RequestLists,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl RequestStore {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            lists: RequestLists::default(),
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn pending(&self) -> &[Request] {
        &self.lists.pending
    }

    pub fn all(&self) -> &[Request] {
        &self.lists.all
    }

    pub fn list(&self, kind: ListKind) -> &[Request] {
        match kind {
            ListKind::Pending => self.pending(),
            ListKind::All => self.all(),
        }
    }

    /// Count for the pending tab badge.
    pub fn pending_count(&self) -> usize {
        self.lists.pending.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// One page of `kind`. Out-of-range pages are empty.
    pub fn get_page(&self, kind: ListKind, page_number: usize, page_size: usize) -> &[Request] {
        page_slice(self.list(kind), page_number, page_size)
    }

    /// Mark a load as started and clear the previous error.
    ///
    /// Starting a load supersedes any load still in flight: only the outcome
    /// of the newest ticket is applied.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        LoadTicket(self.generation)
    }

    /// Apply the outcome of a load started with [`begin_load`](Self::begin_load).
    ///
    /// Outcomes of superseded tickets are discarded and leave the store
    /// loading until the newest load finishes.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<RequestLists>,
    ) -> Result<()> {
        if ticket.0 != self.generation {
            debug!(
                category = ?self.category,
                ticket = ticket.0,
                current = self.generation,
                "Discarding superseded load"
            );
            return Ok(());
        }

        self.loading = false;
        match outcome {
            Ok(lists) => {
                info!(
                    category = ?self.category,
                    pending = lists.pending.len(),
                    all = lists.all.len(),
                    "Request lists loaded"
                );
                self.lists = lists;
                Ok(())
            }
            Err(err) => {
                warn!(category = ?self.category, error = %err, "Request lists failed to load");
                self.error = Some(err.banner(FETCH_CONTEXT));
                Err(err)
            }
        }
    }

    /// Fetch both lists and replace the local copies.
    pub async fn load<B>(&mut self, backend: &B, credential: Option<&Credential>) -> Result<()>
    where
        B: RequestBackend + ?Sized,
    {
        let ticket = self.begin_load();
        let outcome = fetch_lists(backend, self.category, credential).await;
        self.finish_load(ticket, outcome)
    }
}

//! Remote data panel with loading and error states.
//!
//! A [`RemoteResource`] tracks one subject at a time. Each accepted request
//! bumps a generation counter, and a response is only applied if it carries
//! the latest generation, so a slow answer for an old subject can never
//! replace the answer for a newer one.

mod error;
mod http;

pub use error::FetchError;
pub use http::HttpFetcher;

use tracing::{debug, info, instrument, warn};

/// Source of remote data, opaque to the panel.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Data returned for a subject.
    type Output: Send;

    /// Fetches the data for `subject`.
    async fn fetch(&self, subject: &str) -> Result<Self::Output, FetchError>;
}

/// Display state of a remote resource.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus<T> {
    /// Nothing requested yet.
    Idle,
    /// Waiting on a response.
    Pending {
        /// Subject being fetched.
        subject: String,
    },
    /// Data arrived.
    Resolved(T),
    /// The fetch failed.
    Rejected(FetchError),
}

impl<T: std::fmt::Display> FetchStatus<T> {
    /// Renders the panel text for this state.
    pub fn message(&self) -> String {
        match self {
            FetchStatus::Idle => "Submit a name".to_string(),
            FetchStatus::Pending { subject } => format!("Loading {}...", subject),
            FetchStatus::Resolved(data) => data.to_string(),
            FetchStatus::Rejected(error) => format!("There was an error: {}", error.message),
        }
    }
}

/// Proof that a request was issued, used to deliver its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    /// Generation the request was issued in.
    pub generation: u64,
    /// Subject that was requested.
    pub subject: String,
}

/// Panel state for data loaded through a [`Fetcher`].
#[derive(Debug)]
pub struct RemoteResource<F: Fetcher> {
    fetcher: F,
    status: FetchStatus<F::Output>,
    generation: u64,
}

impl<F: Fetcher> RemoteResource<F> {
    /// Creates an idle panel.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            status: FetchStatus::Idle,
            generation: 0,
        }
    }

    /// Returns the current state.
    pub fn status(&self) -> &FetchStatus<F::Output> {
        &self.status
    }

    /// Returns the generation of the latest request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the fetcher, for callers that run requests themselves.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Starts a request for `subject`, superseding any request in flight.
    ///
    /// A blank subject is ignored and leaves the state unchanged.
    #[instrument(skip(self))]
    pub fn request(&mut self, subject: &str) -> Option<RequestTicket> {
        let subject = subject.trim();
        if subject.is_empty() {
            debug!("Ignoring blank subject");
            return None;
        }

        self.generation += 1;
        self.status = FetchStatus::Pending {
            subject: subject.to_string(),
        };
        debug!(generation = self.generation, "Request issued");

        Some(RequestTicket {
            generation: self.generation,
            subject: subject.to_string(),
        })
    }

    /// Delivers the result of the request behind `ticket`.
    ///
    /// Returns `false` and drops the result if a newer request has been
    /// issued since.
    #[instrument(skip(self, result), fields(ok = result.is_ok()))]
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: Result<F::Output, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            warn!(
                latest = self.generation,
                "Dropping response for superseded request"
            );
            return false;
        }

        self.status = match result {
            Ok(data) => {
                info!(subject = %ticket.subject, "Request resolved");
                FetchStatus::Resolved(data)
            }
            Err(error) => {
                warn!(subject = %ticket.subject, error = %error, "Request rejected");
                FetchStatus::Rejected(error)
            }
        };
        true
    }

    /// Requests `subject`, waits for the fetcher, and applies the result.
    #[instrument(skip(self))]
    pub async fn load(&mut self, subject: &str) -> &FetchStatus<F::Output> {
        if let Some(ticket) = self.request(subject) {
            let result = self.fetcher.fetch(&ticket.subject).await;
            self.resolve(ticket, result);
        }
        &self.status
    }
}

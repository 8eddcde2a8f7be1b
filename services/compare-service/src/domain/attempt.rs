use common::RequestError;
use thiserror::Error;

/// One outbound GET made by a requester loop. Logged as soon as it finishes
/// and never kept around afterwards.
#[derive(Debug)]
pub struct OutboundAttempt<'a> {
    pub target: &'a str,
    pub index: usize,
    pub outcome: Result<String, RequestError>,
}

impl<'a> OutboundAttempt<'a> {
    pub fn new(target: &'a str, index: usize, outcome: Result<String, RequestError>) -> Self {
        Self { target, index, outcome }
    }

    pub fn log(&self) {
        match &self.outcome {
            Ok(body) => {
                tracing::debug!("Attempt {} against {} succeeded", self.index, self.target);
                tracing::info!("{}", body);
            }
            Err(e) if e.is_resource_exhausted() => {
                tracing::error!(
                    "Attempt {} against {} ran out of local resources: {}",
                    self.index,
                    self.target,
                    e
                );
            }
            Err(e) => {
                tracing::error!("Attempt {} against {} failed: {}", self.index, self.target, e);
            }
        }
    }

    pub fn into_outcome(self) -> Result<String, RequestError> {
        self.outcome
    }
}

#[derive(Debug)]
pub struct RunReport {
    pub completed: usize,
    // Set when a pooled run stopped early; the caller still sees success
    pub stopped_by: Option<RequestError>,
}

impl RunReport {
    pub fn finished(completed: usize) -> Self {
        Self { completed, stopped_by: None }
    }
}

/// First failure of an unpooled run together with how far it got.
#[derive(Debug, Error)]
#[error("{error} Max: {completed}")]
pub struct RunFailure {
    pub completed: usize,
    #[source]
    pub error: RequestError,
}

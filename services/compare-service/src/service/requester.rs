use common::{fetch_text, fresh_client, ClientFactory, RequestError};

use crate::domain::{OutboundAttempt, RunFailure, RunReport};

pub const UNPOOLED_ITERATIONS: usize = 100_000;
pub const POOLED_ITERATIONS: usize = 100;

/// Iteration counts for the two endpoints. Only tests use anything but the
/// defaults.
#[derive(Clone, Copy, Debug)]
pub struct RunLimits {
    pub unpooled: usize,
    pub pooled: usize,
}

impl Default for RunLimits {
    fn default() -> Self {
        Self {
            unpooled: UNPOOLED_ITERATIONS,
            pooled: POOLED_ITERATIONS,
        }
    }
}

/// Calls `target` `iterations` times, building and dropping a new client for
/// every call. Stops at the first failure and reports how many calls
/// succeeded before it.
pub async fn run_unpooled(target: &str, iterations: usize) -> Result<RunReport, RunFailure> {
    tracing::info!("Start");
    let mut completed = 0;

    for index in 0..iterations {
        let attempt = OutboundAttempt::new(target, index, fetch_with_fresh_client(target).await);
        attempt.log();

        if let Err(error) = attempt.into_outcome() {
            return Err(RunFailure { completed, error });
        }
        completed += 1;
    }

    tracing::info!("Done");
    Ok(RunReport::finished(completed))
}

// The client only lives for this call; its connections go with it on every
// return path.
async fn fetch_with_fresh_client(target: &str) -> Result<String, RequestError> {
    let client = fresh_client()?;
    fetch_text(&client, target).await
}

/// Calls `target` `iterations` times with clients handed out by `factory`.
/// A failure is logged and ends the loop, but never reaches the caller as an
/// error.
pub async fn run_pooled(factory: &dyn ClientFactory, target: &str, iterations: usize) -> RunReport {
    tracing::info!("Start");
    let mut completed = 0;

    for index in 0..iterations {
        let client = factory.create_client();
        let attempt = OutboundAttempt::new(target, index, fetch_text(&client, target).await);
        attempt.log();

        if let Err(error) = attempt.into_outcome() {
            return RunReport {
                completed,
                stopped_by: Some(error),
            };
        }
        completed += 1;
    }

    tracing::info!("Done");
    RunReport::finished(completed)
}

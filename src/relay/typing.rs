use crate::{activity::ReplyTarget, connector::ActivitySender};
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::debug;

/// Default heartbeat. Teams hides the indicator after a few seconds, so
/// this must stay below that.
pub const DEFAULT_TYPING_INTERVAL: Duration = Duration::from_secs(3);

/// Sends a typing activity, then waits up to `interval` for `stop`, until
/// `stop` fires or its sender is dropped.
///
/// Send failures are logged and do not end the loop. No typing activity is
/// sent once `stop` has been observed.
pub async fn keep_typing<S>(
    sender: &S,
    target: &ReplyTarget,
    interval: Duration,
    mut stop: oneshot::Receiver<()>,
) where
    S: ActivitySender + ?Sized,
{
    loop {
        match stop.try_recv() {
            Err(TryRecvError::Empty) => {}
            _ => break,
        }

        if let Err(e) = sender.send_typing(target).await {
            debug!("typing indicator failed: {e}");
        }

        tokio::select! {
            biased;
            _ = &mut stop => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }
}

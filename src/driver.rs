//! Async event driver for the meter.
//!
//! Feeds input-change events into a [`PasswordMeter`] and publishes the
//! resulting [`Feedback`] after every edit.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::feedback::Feedback;
use crate::meter::PasswordMeter;

/// Runs the meter until `token` is cancelled or `edits` closes.
///
/// Sends the feedback for the current password first, then one feedback per
/// received edit, in arrival order. Returns the meter so the caller can
/// inspect or drop it.
pub async fn run_meter(
    mut meter: PasswordMeter,
    mut edits: mpsc::Receiver<String>,
    feedback_tx: mpsc::Sender<Feedback>,
    token: CancellationToken,
) -> PasswordMeter {
    #[cfg(feature = "tracing")]
    tracing::info!("password meter started");

    if !publish(&meter, &feedback_tx, &token).await {
        return meter;
    }

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::info!("password meter cancelled");
                break;
            }
            edit = edits.recv() => {
                let Some(password) = edit else {
                    #[cfg(feature = "tracing")]
                    tracing::info!("edit channel closed, stopping password meter");
                    break;
                };
                meter.change_password(password);
                if !publish(&meter, &feedback_tx, &token).await {
                    break;
                }
            }
        }
    }

    meter
}

/// Sends the current feedback. Returns `false` when the driver should stop:
/// the receiver is gone, or `token` fired while waiting for channel capacity.
async fn publish(
    meter: &PasswordMeter,
    tx: &mpsc::Sender<Feedback>,
    token: &CancellationToken,
) -> bool {
    let feedback = meter.render();
    tokio::select! {
        biased;
        sent = tx.send(feedback) => match sent {
            Ok(()) => true,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send password feedback: {}", _e);
                false
            }
        },
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::info!("password meter cancelled while sending feedback");
            false
        }
    }
}

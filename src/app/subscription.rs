// SPDX-License-Identifier: MPL-2.0
//! Subscriptions feeding the application: host input and frame ticks.
//!
//! The host writes one JSON envelope per line on stdin
//! (`{"action": "textUi", "data": {...}}`). Lines are decoded on the tokio
//! runtime and forwarded as [`Message::Host`]; the overlay state itself is
//! only touched in `App::update`.

use super::Message;
use crate::hud::decode_envelope;
use iced::futures::{Sink, SinkExt};
use iced::{stream, time, Subscription};
use std::io;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Interval between animation frames (about 60 per second).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Subscription ID for the stdin reader. There is only ever one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct HostInputId;

/// Creates the stdin transport, or nothing when it is disabled.
pub fn create_host_subscription(enabled: bool) -> Subscription<Message> {
    if !enabled {
        return Subscription::none();
    }

    Subscription::run_with(HostInputId, |_| {
        stream::channel(100, |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
            let stdin = BufReader::new(tokio::io::stdin());
            if forward_host_events(stdin, &mut output).await {
                tracing::info!("host input closed");
                let _ = output.send(Message::HostClosed).await;
            }
        })
    })
}

/// Decodes envelope lines from `reader` and sends them to `output`.
///
/// Lines that are not valid UTF-8 or fail to decode are skipped with a
/// warning. Returns `true` once the input ends (or fails to read), and
/// `false` if `output` stopped accepting messages.
pub(crate) async fn forward_host_events<R, S>(mut reader: R, output: &mut S) -> bool
where
    R: AsyncBufRead + Unpin,
    S: Sink<Message> + Unpin,
{
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        match reader.read_until(b'\n', &mut buffer).await {
            Ok(0) => return true,
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                tracing::error!(%err, "failed to read host input");
                return true;
            }
        }

        let line = match std::str::from_utf8(&buffer) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(%err, "skipping host line that is not UTF-8");
                continue;
            }
        };

        match decode_envelope(line) {
            Ok(Some(event)) => {
                if output.send(Message::Host(event)).await.is_err() {
                    // Application is shutting down
                    return false;
                }
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "skipping host line"),
        }
    }
}

/// Creates a frame tick subscription while something animates.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

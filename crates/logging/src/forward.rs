//! Forward warnings and errors to the editor UI.
//!
//! This module provides a small tracing [`Layer`] that pushes WARN and ERROR
//! events into a channel when a sink is set. The editor drains the channel
//! between frames and shows the latest entry in its status line, since the
//! terminal itself is owned by the UI.
//!
//! Usage:
//! - Install the [`layer`] in your tracing subscriber.
//! - Call [`set_sink`] with a bounded `crossbeam_channel::Sender`.
//! - Call [`clear_sink`] before tearing the UI down.
//!
//! The layer is lightweight and no-ops when no sink is set.

use std::sync::{
    OnceLock,
    atomic::{AtomicU64, Ordering},
};

use crossbeam_channel::{Sender, TrySendError};
use parking_lot::Mutex;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::fmt::{self, RenderedLog};

/// A global sink that, when present, receives forwarded events.
static LOG_SINK: OnceLock<Mutex<Option<Sender<RenderedLog>>>> = OnceLock::new();

/// Count of log events dropped due to a full channel.
static LOG_DROPS: AtomicU64 = AtomicU64::new(0);

/// Access the global sink.
fn sink() -> &'static Mutex<Option<Sender<RenderedLog>>> {
    LOG_SINK.get_or_init(|| Mutex::new(None))
}

/// Set the forwarding sink.
pub fn set_sink(tx: Sender<RenderedLog>) {
    let mut guard = sink().lock();
    *guard = Some(tx);
}

/// Clear the forwarding sink.
pub fn clear_sink() {
    let mut guard = sink().lock();
    *guard = None;
}

/// Number of events dropped because the channel was full.
pub fn dropped() -> u64 {
    LOG_DROPS.load(Ordering::Relaxed)
}

/// Tracing layer that forwards WARN and ERROR events when a sink is set.
pub struct ForwardLayer;

impl<S> Layer<S> for ForwardLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() > Level::WARN {
            return;
        }
        // Early-exit if there is no sink set
        let tx_opt = { sink().lock().clone() };
        let Some(tx) = tx_opt else { return };

        match tx.try_send(fmt::render_event(event)) {
            Ok(()) => {}
            Err(TrySendError::Disconnected(_)) => {
                // Receiver disappeared; clear to avoid repeated work.
                clear_sink();
            }
            Err(TrySendError::Full(_)) => {
                LOG_DROPS.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

/// Create the forwarding layer instance to add to your subscriber.
pub fn layer() -> ForwardLayer {
    ForwardLayer
}

//! Debounced filter state.
//!
//! [`FilterStateController`] owns the live [`FileFilters`] of a search
//! form. Edits are applied immediately and in order; the sink only hears
//! about the state once edits have stopped arriving for the quiescence
//! window, and then only once, with the state as of the last edit.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::filters::FilterEdit;
use crate::model::FileFilters;

/// Quiescence window used by [`FilterStateController::new`].
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(300);

/// Receiver of settled filter snapshots.
pub trait FilterSink: Send + Sync + 'static {
    fn on_filters_change(&self, filters: FileFilters);
}

impl<F> FilterSink for F
where
    F: Fn(FileFilters) + Send + Sync + 'static,
{
    fn on_filters_change(&self, filters: FileFilters) {
        self(filters)
    }
}

/// A sink that forwards snapshots into an unbounded channel.
///
/// Sends to a closed channel are dropped silently.
#[derive(Debug, Clone)]
pub struct ChannelSink(UnboundedSender<FileFilters>);

impl ChannelSink {
    pub fn new(tx: UnboundedSender<FileFilters>) -> Self {
        Self(tx)
    }
}

impl FilterSink for ChannelSink {
    fn on_filters_change(&self, filters: FileFilters) {
        if self.0.send(filters).is_err() {
            tracing::trace!("filter sink receiver closed");
        }
    }
}

/// The one scheduled notification a controller may own.
///
/// `claimed` is set by whoever delivers or cancels first, so a snapshot is
/// delivered at most once even if the timer fires while it is cancelled.
struct PendingNotification {
    handle: JoinHandle<()>,
    claimed: Arc<AtomicBool>,
}

impl PendingNotification {
    /// Cancels delivery. Returns `true` if the notification had not fired yet.
    fn cancel(self) -> bool {
        let was_live = !self.claimed.swap(true, Ordering::AcqRel);
        self.handle.abort();
        was_live
    }

    fn is_live(&self) -> bool {
        !self.claimed.load(Ordering::Acquire) && !self.handle.is_finished()
    }
}

/// Owner of a search form's filter state.
///
/// The sink is fixed at construction. Dropping the controller (or calling
/// [`FilterStateController::dispose`]) cancels any pending notification.
pub struct FilterStateController {
    state: FileFilters,
    window: Duration,
    sink: Arc<dyn FilterSink>,
    pending: Option<PendingNotification>,
    runtime: Handle,
}

impl FilterStateController {
    /// Creates a controller with the default 300 ms window on the current runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside the context of a Tokio runtime.
    pub fn new(sink: impl FilterSink) -> Self {
        Self::with_window(sink, DEFAULT_QUIESCENCE)
    }

    /// Creates a controller with a custom quiescence window on the current runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside the context of a Tokio runtime.
    pub fn with_window(sink: impl FilterSink, window: Duration) -> Self {
        Self::with_handle(sink, window, Handle::current())
    }

    /// Creates a controller that schedules its timers on `runtime`.
    pub fn with_handle(sink: impl FilterSink, window: Duration, runtime: Handle) -> Self {
        Self {
            state: FileFilters::default(),
            window,
            sink: Arc::new(sink),
            pending: None,
            runtime,
        }
    }

    /// Applies `edit` and restarts the quiescence window.
    pub fn set_field(&mut self, edit: FilterEdit) {
        tracing::trace!(?edit, "filter edit");
        self.state = self.state.apply(edit);
        self.schedule();
    }

    /// Clears every field and restarts the quiescence window.
    pub fn reset(&mut self) {
        self.state = FileFilters::default();
        self.schedule();
    }

    /// The current filter state, including edits not yet delivered.
    pub fn state(&self) -> &FileFilters {
        &self.state
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns `true` while a notification is scheduled but has not fired.
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(PendingNotification::is_live)
    }

    /// Delivers the pending snapshot now instead of waiting for the window.
    ///
    /// Does nothing when no notification is pending.
    pub fn flush(&mut self) {
        if let Some(pending) = self.pending.take() {
            if pending.cancel() {
                tracing::debug!("filters flushed");
                self.sink.on_filters_change(self.state.clone());
            }
        }
    }

    /// Tears the controller down, cancelling any pending notification.
    pub fn dispose(mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        tracing::trace!("filter controller disposed");
    }

    fn schedule(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }

        let claimed = Arc::new(AtomicBool::new(false));
        let snapshot = self.state.clone();
        let sink = Arc::clone(&self.sink);
        let window = self.window;
        let task_claimed = Arc::clone(&claimed);

        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(window).await;
            if !task_claimed.swap(true, Ordering::AcqRel) {
                tracing::debug!(filters = ?snapshot, "filters settled");
                sink.on_filters_change(snapshot);
            }
        });

        self.pending = Some(PendingNotification { handle, claimed });
    }
}

impl Drop for FilterStateController {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            if pending.cancel() {
                tracing::trace!("pending filter notification cancelled");
            }
        }
    }
}

impl std::fmt::Debug for FilterStateController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterStateController")
            .field("state", &self.state)
            .field("window", &self.window)
            .field("pending", &self.has_pending())
            .finish()
    }
}

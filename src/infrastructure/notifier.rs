use crate::domain::services::{Notice, NoticeKind, Notifier};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

const MAX_QUEUED: usize = 50;

#[derive(Debug, Clone)]
pub struct QueuedNotice {
    pub notice: Notice,
    pub raised_at: Instant,
}

/// Notifier that keeps recent notices in a shared queue until they expire.
#[derive(Clone, Default)]
pub struct QueuedNotifier {
    queue: Arc<Mutex<VecDeque<QueuedNotice>>>,
}

impl QueuedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<QueuedNotice>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Notices raised within `ttl` of `now`, oldest first. Older ones are dropped.
    pub fn active(&self, now: Instant, ttl: Duration) -> Vec<QueuedNotice> {
        let mut queue = self.lock();
        queue.retain(|n| now.saturating_duration_since(n.raised_at) < ttl);
        queue.iter().cloned().collect()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.lock().iter().map(|n| n.notice.clone()).collect()
    }

    pub fn count(&self, kind: NoticeKind) -> usize {
        self.lock().iter().filter(|n| n.notice.kind == kind).count()
    }

    pub fn last(&self) -> Option<Notice> {
        self.lock().back().map(|n| n.notice.clone())
    }

    pub fn dismiss(&self, index: usize) {
        self.lock().remove(index);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Notifier for QueuedNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => tracing::info!("{}", notice.message),
            NoticeKind::Failure => tracing::warn!("{}", notice.message),
        }
        let mut queue = self.lock();
        if queue.len() >= MAX_QUEUED {
            queue.pop_front();
        }
        queue.push_back(QueuedNotice {
            notice,
            raised_at: Instant::now(),
        });
    }
}

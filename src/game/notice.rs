use std::time::{Duration, Instant};

use super::Player;

/// Flavour text announced when the board fills up without a winner.
pub const TIE_MESSAGE: &str =
    "Somehow, you've managed a tie. You probably didn't even try to win...";

/// End-of-game announcement, delivered some time after the final piece lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndNotice {
    Won(Player),
    Tied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scheduled {
    notice: EndNotice,
    due: Instant,
}

/// Holds at most one pending end-of-game notice.
///
/// The queue never looks at a clock itself: callers pass `now` to `schedule`
/// and `poll`, so hosts can drive it from an event loop, a timer or a test.
#[derive(Debug, Clone)]
pub struct NoticeQueue {
    delay: Duration,
    pending: Option<Scheduled>,
}

impl NoticeQueue {
    pub fn new(delay: Duration) -> Self {
        NoticeQueue {
            delay,
            pending: None,
        }
    }

    /// Schedule `notice` to become due `delay` after `now`, replacing any pending one.
    pub fn schedule(&mut self, notice: EndNotice, now: Instant) {
        self.pending = Some(Scheduled {
            notice,
            due: now + self.delay,
        });
    }

    /// Drop the pending notice. Returns true if there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending notice becomes due, if any.
    pub fn due_at(&self) -> Option<Instant> {
        self.pending.map(|scheduled| scheduled.due)
    }

    /// Take the pending notice if it is due at `now`. Each notice is returned once.
    pub fn poll(&mut self, now: Instant) -> Option<EndNotice> {
        match self.pending {
            Some(scheduled) if scheduled.due <= now => {
                self.pending = None;
                Some(scheduled.notice)
            }
            _ => None,
        }
    }
}

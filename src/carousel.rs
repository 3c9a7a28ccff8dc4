use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

/// How long each featured recipe stays on screen.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(5);

/// Position within a fixed list of slides, wrapping at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    pub fn current<'a, T>(&self, slides: &'a [T]) -> Option<&'a T> {
        slides.get(self.index)
    }
}

/// Advances `carousel` once per `period` until `shutdown` fires (or its
/// sender is dropped), or until `max_rotations` advances have happened.
///
/// `on_advance` receives the new index after every step. Returns the number
/// of advances made.
pub async fn auto_advance<F>(
    carousel: &mut Carousel,
    period: Duration,
    max_rotations: Option<usize>,
    mut shutdown: oneshot::Receiver<()>,
    mut on_advance: F,
) -> usize
where
    F: FnMut(usize),
{
    // The first slide is already showing, so the first tick is one period out.
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut advanced = 0;
    while max_rotations.map_or(true, |max| advanced < max) {
        tokio::select! {
            _ = &mut shutdown => {
                debug!(advanced, "carousel shut down");
                break;
            }
            _ = ticker.tick() => {
                let index = carousel.next();
                advanced += 1;
                on_advance(index);
            }
        }
    }
    advanced
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Navigate-to-result: scroll, flash, restore.
//!
//! Selecting a result scrolls its element to the center of the viewport and
//! gives it a tinted background for a couple of seconds. The element's own
//! inline `background-color` and `transition` are captured first and put
//! back afterwards, background first, transition one settle period later so
//! the fade-out still animates.
//!
//! The restores run through a `Scheduler`. They are fire-and-forget: nothing
//! cancels them, and they only ever touch the one element they captured.
//! Because selecting a result also closes the search, at most one pulse from
//! a session is in flight at a time.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use super::source::{StyleProperty, TextNodeSource};
use crate::config::EmphasisConfig;

/// Deferred execution of a task.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Scroll `node` into view and run the emphasis pulse on it.
pub fn pulse<S, K>(source: &S, node: &S::Node, config: &EmphasisConfig, scheduler: &K)
where
    S: TextNodeSource + Clone + 'static,
    S::Node: 'static,
    K: Scheduler + ?Sized,
{
    source.scroll_into_view(node);

    let original_background = source.style(node, StyleProperty::BackgroundColor);
    let original_transition = source.style(node, StyleProperty::Transition);

    source.set_style(node, StyleProperty::Transition, &config.transition);
    source.set_style(node, StyleProperty::BackgroundColor, &config.background);

    let dwell = Duration::from_millis(config.dwell_ms);
    let settle = Duration::from_millis(config.settle_ms);
    debug!(
        dwell_ms = config.dwell_ms,
        settle_ms = config.settle_ms,
        "emphasis pulse started"
    );

    {
        let source = source.clone();
        let node = node.clone();
        scheduler.schedule(
            dwell,
            Box::new(move || {
                source.set_style(&node, StyleProperty::BackgroundColor, &original_background);
            }),
        );
    }

    let source = source.clone();
    let node = node.clone();
    scheduler.schedule(
        dwell + settle,
        Box::new(move || {
            source.set_style(&node, StyleProperty::Transition, &original_transition);
        }),
    );
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

/// Deterministic scheduler driven by an explicit clock.
///
/// Tasks run in due order (ties in scheduling order) when the clock is
/// advanced past them. Clones share the same queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the manual clock.
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of tasks not yet run.
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Move the clock forward by `by`, running every task that falls due.
    /// Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut ran = 0;

        // The borrow is released before each task runs; tasks may schedule more.
        while let Some(task) = self.pop_due(target) {
            task();
            ran += 1;
        }

        self.queue.borrow_mut().now = target;
        ran
    }

    /// Run everything, including tasks scheduled by tasks.
    pub fn run_all(&self) -> usize {
        let mut ran = 0;
        loop {
            let latest = self.queue.borrow().pending.iter().map(|p| p.due).max();
            let Some(latest) = latest else {
                return ran;
            };
            let by = latest.saturating_sub(self.now());
            ran += self.advance(by);
        }
    }

    fn pop_due(&self, target: Duration) -> Option<Box<dyn FnOnce()>> {
        let mut queue = self.queue.borrow_mut();
        let idx = queue
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(idx, _)| idx)?;
        let pending = queue.pending.remove(idx);
        queue.now = pending.due;
        Some(pending.task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let mut queue = self.queue.borrow_mut();
        let due = queue.now + delay;
        let seq = queue.next_seq;
        queue.next_seq += 1;
        queue.pending.push(Pending { due, seq, task });
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.queue.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &queue.now)
            .field("pending", &queue.pending.len())
            .finish()
    }
}

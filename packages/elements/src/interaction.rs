//! Transient interaction state for stateful element kinds.
//!
//! Carousel, Modal and Tabs own their interaction state internally; none
//! of it lives in `EditorState` and none of it is persisted. The editor
//! runs single-threaded on the host event loop, so recurring timers are
//! not background tasks: the host advances a deterministic `Timers`
//! scheduler and routes fired ticks back to the owning state.
//!
//! Lifecycle contract: unmounting (or reconfiguring) a stateful kind
//! synchronously cancels its timers and releases host-chrome effects,
//! exactly once.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerId(u64);

#[derive(Debug)]
struct TimerEntry {
    id: TimerId,
    every_ms: u64,
    remaining_ms: u64,
}

/// Deterministic interval scheduler driven by the host event loop
#[derive(Debug, Default)]
pub struct Timers {
    next_id: u64,
    entries: Vec<TimerEntry>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a recurring timer firing every `every_ms` milliseconds
    pub fn set_interval(&mut self, every_ms: u64) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let every_ms = every_ms.max(1);

        self.entries.push(TimerEntry {
            id,
            every_ms,
            remaining_ms: every_ms,
        });

        id
    }

    /// Cancel a timer. Returns false if it was already gone.
    pub fn clear(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Advance virtual time, returning one entry per fired tick
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<TimerId> {
        let mut fired = Vec::new();

        for entry in &mut self.entries {
            if elapsed_ms < entry.remaining_ms {
                entry.remaining_ms -= elapsed_ms;
                continue;
            }

            let past_first = elapsed_ms - entry.remaining_ms;
            let ticks = 1 + past_first / entry.every_ms;
            entry.remaining_ms = entry.every_ms - (past_first % entry.every_ms);

            for _ in 0..ticks {
                fired.push(entry.id);
            }
        }

        fired
    }

    /// Number of registered timers
    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}

/// Key signals the host forwards to interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Host chrome effects shared by the whole editor surface
#[derive(Debug, Default)]
pub struct HostChrome {
    scroll_locks: u32,
}

impl HostChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock_scroll(&mut self) {
        self.scroll_locks += 1;
    }

    pub fn unlock_scroll(&mut self) {
        self.scroll_locks = self.scroll_locks.saturating_sub(1);
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locks > 0
    }
}

/// Carousel slide state plus its auto-advance timer
#[derive(Debug)]
pub struct CarouselState {
    current_index: usize,
    item_count: usize,
    auto_play: bool,
    interval_ms: u64,
    timer: Option<TimerId>,
}

impl CarouselState {
    pub fn mount(
        item_count: usize,
        auto_play: bool,
        interval_ms: u64,
        timers: &mut Timers,
    ) -> Self {
        let mut state = Self {
            current_index: 0,
            item_count,
            auto_play,
            interval_ms,
            timer: None,
        };
        state.ensure_timer(timers);
        state
    }

    /// Auto-advance runs only with more than one item and a usable interval
    fn wants_timer(&self) -> bool {
        self.auto_play && self.item_count > 1 && self.interval_ms > 0
    }

    fn ensure_timer(&mut self, timers: &mut Timers) {
        if self.wants_timer() {
            if self.timer.is_none() {
                self.timer = Some(timers.set_interval(self.interval_ms));
            }
        } else if let Some(timer) = self.timer.take() {
            timers.clear(timer);
        }
    }

    /// Reconcile with new props. Any change to auto-play, interval or
    /// item count tears the old timer down and starts a fresh one.
    pub fn sync(
        &mut self,
        item_count: usize,
        auto_play: bool,
        interval_ms: u64,
        timers: &mut Timers,
    ) {
        let changed = item_count != self.item_count
            || auto_play != self.auto_play
            || interval_ms != self.interval_ms;

        if !changed {
            return;
        }

        if let Some(timer) = self.timer.take() {
            timers.clear(timer);
        }

        self.item_count = item_count;
        self.auto_play = auto_play;
        self.interval_ms = interval_ms;

        if self.item_count == 0 {
            self.current_index = 0;
        } else if self.current_index >= self.item_count {
            self.current_index = self.item_count - 1;
        }

        self.ensure_timer(timers);
    }

    /// Route a fired tick. Advances only if the tick belongs to this
    /// carousel's timer.
    pub fn handle_tick(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) || self.item_count == 0 {
            return false;
        }

        self.current_index = (self.current_index + 1) % self.item_count;
        true
    }

    pub fn next(&mut self) {
        if self.item_count > 0 {
            self.current_index = (self.current_index + 1) % self.item_count;
        }
    }

    pub fn prev(&mut self) {
        if self.item_count > 0 {
            self.current_index = (self.current_index + self.item_count - 1) % self.item_count;
        }
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.item_count {
            self.current_index = index;
            true
        } else {
            false
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Cancel the auto-advance timer before teardown completes
    pub fn unmount(mut self, timers: &mut Timers) {
        if let Some(timer) = self.timer.take() {
            timers.clear(timer);
        }
    }
}

/// Modal open/closed state with scroll suppression and Escape handling
#[derive(Debug, Default)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opening acquires the scroll lock once; reopening an open modal
    /// is a no-op
    pub fn open(&mut self, chrome: &mut HostChrome) {
        if !self.open {
            self.open = true;
            chrome.lock_scroll();
        }
    }

    /// Closing releases the scroll lock exactly once. Returns whether
    /// the modal actually closed.
    pub fn close(&mut self, chrome: &mut HostChrome) -> bool {
        if self.open {
            self.open = false;
            chrome.unlock_scroll();
            true
        } else {
            false
        }
    }

    /// Escape closes an open modal; all other keys are ignored
    pub fn handle_key(&mut self, key: Key, chrome: &mut HostChrome) -> bool {
        match key {
            Key::Escape => self.close(chrome),
            Key::Other => false,
        }
    }

    /// Unmount while open must release chrome effects, and must not
    /// double-release after an explicit close
    pub fn unmount(&mut self, chrome: &mut HostChrome) {
        self.close(chrome);
    }
}

/// Active-tab state
#[derive(Debug)]
pub struct TabsState {
    active: usize,
    count: usize,
}

impl TabsState {
    pub fn new(count: usize) -> Self {
        Self { active: 0, count }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Out-of-range selections are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.count {
            self.active = index;
            true
        } else {
            false
        }
    }
}

use crate::feed::{FeedItem, FeedItemId, FeedItemKind};
use crate::rotation::{DisplayWindow, WindowMode};

/// Where the controller is in the two-phase advance handshake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationPhase {
    /// Showing a window, waiting for the next rotation tick
    Idle,
    /// The current window is animating out; the cursor has not moved yet
    Exiting,
}

/// Pure rotation state: a cursor into the feed, the transition phase,
/// and an optional pinned item.
///
/// The feed itself is owned by the aggregator and can change between
/// any two calls, so every operation takes the current items as an
/// argument and re-derives the window instead of caching it. That is
/// what makes the two-phase protocol safe: the advance distance is
/// computed from the items present when the transition *completes*,
/// not when it started.
pub struct RotationController {
    cursor: usize,
    phase: RotationPhase,
    pinned: Option<FeedItemId>,
    mode: WindowMode,
}

impl RotationController {
    pub fn new(mode: WindowMode) -> Self {
        Self {
            cursor: 0,
            phase: RotationPhase::Idle,
            pinned: None,
            mode,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn in_transition(&self) -> bool {
        self.phase == RotationPhase::Exiting
    }

    pub fn pinned(&self) -> Option<FeedItemId> {
        self.pinned
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    /// The window currently on screen.
    ///
    /// While an item is pinned the window is just that item. If the
    /// pinned item has vanished from the feed the rotation window shows
    /// instead; the engine unpins on removal, so that state is brief.
    pub fn current_window(&self, items: &[FeedItem]) -> DisplayWindow {
        if let Some(id) = self.pinned {
            if let Some(item) = items.iter().find(|item| item.id == id) {
                return DisplayWindow {
                    items: vec![item.clone()],
                    in_transition: self.in_transition(),
                    pinned: Some(id),
                };
            }
        }

        DisplayWindow {
            items: self
                .window_indices(items)
                .into_iter()
                .map(|index| items[index].clone())
                .collect(),
            in_transition: self.in_transition(),
            pinned: None,
        }
    }

    /// Phase one: start an advance.
    ///
    /// Refused while already exiting, while pinned, and on an empty
    /// feed. Returns whether the transition actually started; when it
    /// did, the caller owns scheduling the completion.
    pub fn begin_transition(&mut self, items: &[FeedItem]) -> bool {
        if self.phase != RotationPhase::Idle || self.pinned.is_some() || items.is_empty() {
            return false;
        }
        self.phase = RotationPhase::Exiting;
        true
    }

    /// Phase two: advance the cursor and return to idle.
    ///
    /// The advance distance is the size of the window *now*, so a feed
    /// that changed mid-transition cannot make the cursor skip items or
    /// land out of bounds. Returns the new cursor, or `None` when there
    /// was no transition in flight or the feed emptied meanwhile.
    pub fn complete_transition(&mut self, items: &[FeedItem]) -> Option<usize> {
        if self.phase != RotationPhase::Exiting {
            return None;
        }
        self.phase = RotationPhase::Idle;

        let count = items.len();
        if count == 0 {
            self.cursor = 0;
            return None;
        }

        let advance = self.window_indices(items).len();
        self.cursor = (self.cursor % count + advance) % count;
        Some(self.cursor)
    }

    /// Abandon an in-flight transition without moving the cursor.
    pub fn cancel_transition(&mut self) {
        self.phase = RotationPhase::Idle;
    }

    /// Pin an item, suspending rotation on it.
    ///
    /// Pinning an id that is not in the feed is a no-op. Pinning cancels
    /// any in-flight transition so the pinned item cannot be rotated out
    /// from under the viewer.
    pub fn pin(&mut self, id: FeedItemId, items: &[FeedItem]) -> bool {
        if !items.iter().any(|item| item.id == id) {
            return false;
        }
        self.pinned = Some(id);
        self.cancel_transition();
        true
    }

    /// Release the pin. Returns whether anything was pinned.
    pub fn unpin(&mut self) -> bool {
        self.pinned.take().is_some()
    }

    /// Indices of the rotation window at the current cursor.
    ///
    /// The cursor is normalized against the current feed length, so a
    /// cursor left pointing past the end by a shrinking feed simply
    /// wraps instead of panicking.
    fn window_indices(&self, items: &[FeedItem]) -> Vec<usize> {
        let count = items.len();
        if count == 0 {
            return Vec::new();
        }
        let head = self.cursor % count;

        match self.mode {
            WindowMode::Adaptive => {
                if items[head].kind == FeedItemKind::News {
                    return vec![head];
                }
                let next = (head + 1) % count;
                if next != head && items[next].kind != FeedItemKind::News {
                    vec![head, next]
                } else {
                    vec![head]
                }
            }
            WindowMode::Fixed(size) => {
                let take = size.clamp(1, count);
                (0..take).map(|offset| (head + offset) % count).collect()
            }
        }
    }
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new(WindowMode::default())
    }
}

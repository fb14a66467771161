// SPDX-License-Identifier: MPL-2.0
//! Keyed subtree replacement.
//!
//! A [`Presence`] owns exactly one displayed key at any time. Replacing the
//! key retires the displayed subtree first: with [`ExitPolicy::Blocking`] the
//! exit animation runs to completion and only then is the new key mounted;
//! with [`ExitPolicy::NonBlocking`] the old subtree is dropped on the spot.
//! Either way the two subtrees are never on screen together.

use super::tween::Cascade;
use super::variants::Frame;
use std::time::Instant;

/// How the outgoing subtree is retired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// Wait for the exit animation before mounting the next key.
    #[default]
    Blocking,
    /// Retire immediately; the next key mounts in the same update.
    NonBlocking,
}

#[derive(Debug, Clone)]
pub struct Presence<K> {
    displayed: K,
    pending: Option<K>,
    policy: ExitPolicy,
    cascade: Cascade,
    exit_started_at: Option<Instant>,
}

impl<K: Clone + PartialEq> Presence<K> {
    /// Mounts `initial` and starts its entrance at `now`.
    #[must_use]
    pub fn new(initial: K, cascade: Cascade, policy: ExitPolicy, now: Instant) -> Self {
        let mut presence = Self::new_hidden(initial, cascade, policy);
        presence.cascade.reveal(now);
        presence
    }

    /// Mounts `initial` without starting its entrance yet.
    #[must_use]
    pub fn new_hidden(initial: K, cascade: Cascade, policy: ExitPolicy) -> Self {
        Self {
            displayed: initial,
            pending: None,
            policy,
            cascade,
            exit_started_at: None,
        }
    }

    /// Key of the subtree currently on screen. During an exit this is still
    /// the outgoing key.
    #[must_use]
    pub fn displayed(&self) -> &K {
        &self.displayed
    }

    /// Key waiting for the exit to finish.
    #[must_use]
    pub fn pending(&self) -> Option<&K> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.exit_started_at.is_some()
    }

    /// Starts the entrance of the displayed key (e.g. once it scrolls into
    /// view).
    pub fn reveal(&mut self, now: Instant) {
        if !self.is_exiting() {
            self.cascade.reveal(now);
        }
    }

    /// Puts the displayed subtree back in its hidden state without
    /// animating. Used when the displayed key renders nothing, so the next
    /// key has no exit to wait for. No-op during an exit.
    pub fn conceal(&mut self) {
        if !self.is_exiting() {
            self.cascade.reset();
        }
    }

    /// Requests `key` to be displayed. Returns `false` when nothing changes.
    ///
    /// Requesting another key during a running exit only retargets the
    /// pending key; the exit keeps its original schedule.
    pub fn replace(&mut self, key: K, now: Instant) -> bool {
        if self.pending.is_none() && key == self.displayed {
            return false;
        }
        if self.pending.as_ref() == Some(&key) {
            return false;
        }

        match self.policy {
            ExitPolicy::NonBlocking => {
                self.mount(key, now);
            }
            ExitPolicy::Blocking => {
                if self.cascade.is_hidden() {
                    // Nothing on screen to retire
                    self.mount(key, now);
                } else {
                    if self.exit_started_at.is_none() {
                        self.cascade.hide(now);
                        self.exit_started_at = Some(now);
                    }
                    self.pending = Some(key);
                }
            }
        }
        true
    }

    fn mount(&mut self, key: K, at: Instant) {
        self.displayed = key;
        self.pending = None;
        self.exit_started_at = None;
        self.cascade.reset();
        self.cascade.reveal(at);
    }

    /// Advances the sequencing. Returns `true` when a pending key was mounted.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(started_at) = self.exit_started_at else {
            return false;
        };
        let exit_end = started_at + self.cascade.exit_duration();
        if now < exit_end {
            return false;
        }
        match self.pending.take() {
            Some(key) => {
                self.mount(key, exit_end);
                true
            }
            None => {
                self.exit_started_at = None;
                false
            }
        }
    }

    #[must_use]
    pub fn container_frame(&self, now: Instant) -> Frame {
        self.cascade.container_frame(now)
    }

    #[must_use]
    pub fn child_frame(&self, index: usize, now: Instant) -> Frame {
        self.cascade.child_frame(index, now)
    }

    /// Whether frames still change over time (or a mount is still pending).
    #[must_use]
    pub fn is_animating(&self, child_count: usize, now: Instant) -> bool {
        self.is_exiting() || self.cascade.is_animating(child_count, now)
    }
}

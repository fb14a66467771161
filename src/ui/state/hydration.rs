// SPDX-License-Identifier: MPL-2.0
//! Two-phase hydration guard.
//!
//! Anything that depends on the runtime environment (window size, scroll
//! position, the resolved theme) is only rendered once the guard is
//! [`Hydration::Ready`]. Until then views draw a neutral placeholder, so the
//! first frame is identical whatever the environment looks like.

/// Hydration phase of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hydration {
    #[default]
    Uninitialized,
    Ready,
}

impl Hydration {
    /// Moves to [`Hydration::Ready`]. Returns `true` on the first call only.
    pub fn mark_ready(&mut self) -> bool {
        let first = *self == Hydration::Uninitialized;
        *self = Hydration::Ready;
        first
    }

    #[must_use]
    pub fn is_ready(self) -> bool {
        self == Hydration::Ready
    }

    /// Runs `f` only once hydrated.
    pub fn gate<T>(self, f: impl FnOnce() -> T) -> Option<T> {
        self.is_ready().then(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_uninitialized() {
        assert_eq!(Hydration::default(), Hydration::Uninitialized);
        assert!(!Hydration::default().is_ready());
    }

    #[test]
    fn mark_ready_reports_first_transition_only() {
        let mut hydration = Hydration::default();
        assert!(hydration.mark_ready());
        assert!(!hydration.mark_ready());
        assert!(hydration.is_ready());
    }

    #[test]
    fn gate_skips_closure_before_ready() {
        let mut calls = 0;
        assert_eq!(
            Hydration::Uninitialized.gate(|| {
                calls += 1;
                1
            }),
            None
        );
        assert_eq!(calls, 0);
        assert_eq!(Hydration::Ready.gate(|| 7), Some(7));
    }
}

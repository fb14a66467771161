// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events and the Escape key are always routed. The page mounts on
//! the first redraw, and the animation frame subscription only runs while
//! something is moving.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Roughly one frame at 60 Hz.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes window and keyboard events.
///
/// Keyboard events already captured by a widget are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => match status {
            event::Status::Ignored => Some(Message::EscapePressed),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Reports the first drawn frame, then goes quiet once the page is hydrated.
pub fn create_mount_subscription(hydrated: bool) -> Subscription<Message> {
    if hydrated {
        Subscription::none()
    } else {
        window::frames().map(|_at| Message::Mounted)
    }
}

/// Creates the animation frame subscription.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Applies animation frames to widget trees.
//!
//! Opacity is handled by the style functions (every animated style takes an
//! `alpha`). This module covers displacement and scale.

use crate::ui::animation::Frame;
use iced::widget::Container;
use iced::{Element, Padding};

/// Displaces `content` by the frame's offsets using padding.
///
/// Positive offsets push the content right/down. Negative offsets are
/// rendered as trailing padding, so the content keeps its position while the
/// trailing edge moves.
pub fn offset<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    frame: Frame,
) -> Element<'a, Message> {
    Container::new(content).padding(padding_for(frame)).into()
}

/// Scales a length by the frame's scale factor.
#[must_use]
pub fn scaled(length: f32, frame: Frame) -> f32 {
    length * frame.scale
}

fn padding_for(frame: Frame) -> Padding {
    Padding {
        top: frame.offset_y.max(0.0),
        bottom: (-frame.offset_y).max(0.0),
        left: frame.offset_x.max(0.0),
        right: (-frame.offset_x).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_frame_adds_no_padding() {
        assert_eq!(padding_for(Frame::REST), Padding::ZERO);
    }

    #[test]
    fn offsets_map_to_opposite_edges() {
        let padding = padding_for(Frame::REST.with_offset_y(20.0).with_offset_x(-50.0));
        assert_eq!(padding.top, 20.0);
        assert_eq!(padding.bottom, 0.0);
        assert_eq!(padding.left, 0.0);
        assert_eq!(padding.right, 50.0);
    }

    #[test]
    fn scale_multiplies_lengths() {
        assert_eq!(scaled(100.0, Frame::REST.with_scale(0.95)), 95.0);
    }
}

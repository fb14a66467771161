// SPDX-License-Identifier: MPL-2.0
pub mod animated;

pub use animated::{offset, scaled};

// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Settings for parsing.

/// Scope label used in error messages when the caller doesn't give
/// one.
pub const DEFAULT_SCOPE_NAME: &str = "__unknown__";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// How many lists and quote forms may be nested inside each
    /// other before parsing fails instead of recursing deeper.
    pub depth_fuel: u32,
}

pub const DEFAULT_SETTINGS : Settings = Settings {
    // the stack limit with default settings on Linux is around 1200
    depth_fuel: 500,
};

impl Default for Settings {
    fn default() -> Settings {
        DEFAULT_SETTINGS
    }
}

//! The general configuration settings for lsx.
//!
//! [General] is deserialized straight from the `[general]` table; [InternalGeneral] is the
//! validated form used at runtime.

use crate::core::DEFAULT_WIDTH;
use crate::utils::clamp_fallback_width;

use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    case_insensitive: bool,
    fallback_width: usize,
}

impl Default for General {
    fn default() -> Self {
        General {
            case_insensitive: true,
            fallback_width: DEFAULT_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InternalGeneral {
    case_insensitive: bool,
    fallback_width: usize,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        Self {
            case_insensitive: g.case_insensitive,
            fallback_width: clamp_fallback_width(g.fallback_width),
        }
    }
}

impl InternalGeneral {
    /// Order names ignoring ASCII case.
    #[inline]
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Width used when stdout is not a terminal or the terminal reports zero columns.
    #[inline]
    pub fn fallback_width(&self) -> usize {
        self.fallback_width
    }
}

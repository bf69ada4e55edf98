//! Colour tag model for events.
//!
//! Every event carries one tag from a small fixed palette. The tag is purely
//! cosmetic: it has no identity or ordering meaning and never changes after
//! the event is created.

use serde::{Deserialize, Serialize};

/// A cosmetic colour category drawn from the fixed event palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Red,
    Green,
    Purple,
    Yellow,
    Pink,
}

impl ColorTag {
    /// The whole palette, in assignment order.
    pub const PALETTE: [ColorTag; 6] = [
        ColorTag::Blue,
        ColorTag::Red,
        ColorTag::Green,
        ColorTag::Purple,
        ColorTag::Yellow,
        ColorTag::Pink,
    ];

    /// Pick a tag by index, wrapping around the palette.
    pub fn from_index(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    /// Lowercase display name (e.g. "blue").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
        }
    }

    /// Light background shade used behind the event title.
    pub fn background_hex(&self) -> &'static str {
        match self {
            Self::Blue => "#DBEAFE",
            Self::Red => "#FEE2E2",
            Self::Green => "#DCFCE7",
            Self::Purple => "#F3E8FF",
            Self::Yellow => "#FEF9C3",
            Self::Pink => "#FCE7F3",
        }
    }

    /// Dark foreground shade used for the event title text.
    pub fn foreground_hex(&self) -> &'static str {
        match self {
            Self::Blue => "#1E40AF",
            Self::Red => "#991B1B",
            Self::Green => "#166534",
            Self::Purple => "#6B21A8",
            Self::Yellow => "#854D0E",
            Self::Pink => "#9D174D",
        }
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

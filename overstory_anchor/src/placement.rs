// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement: the canonical side + alignment vocabulary.

use core::fmt;
use core::str::FromStr;

/// The side of the reference the floating element sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the reference.
    Top,
    /// Below the reference.
    Bottom,
    /// To the left of the reference.
    Left,
    /// To the right of the reference.
    Right,
}

impl Side {
    /// The opposite side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns `true` for `Top`/`Bottom`, whose primary axis is vertical.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Alignment of the floating element along the reference's cross axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Align {
    /// Leading edges aligned.
    Start,
    /// Centered on the reference.
    Center,
    /// Trailing edges aligned.
    End,
}

impl Align {
    /// The opposite alignment; `Center` is its own opposite.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::Center => Self::Center,
            Self::End => Self::Start,
        }
    }
}

/// Text direction, used to mirror placements for right-to-left locales.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

/// One of the twelve canonical placements of a floating element.
///
/// Rendered as `"bottom-start"`, `"top"` (center alignment elides the
/// suffix), `"right-end"`, and so on; [`FromStr`] parses the same notation.
///
/// ```rust
/// use overstory_anchor::placement::{Align, Placement, Side};
///
/// let placement: Placement = "bottom-start".parse().unwrap();
/// assert_eq!(placement, Placement::new(Side::Bottom, Align::Start));
/// assert_eq!(placement.opposite().to_string(), "top-start");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Side of the reference.
    pub side: Side,
    /// Alignment along that side.
    pub align: Align,
}

impl Placement {
    /// All twelve canonical placements, in a stable order.
    pub const ALL: [Self; 12] = {
        let mut all = [Self::new(Side::Top, Align::Start); 12];
        let sides = [Side::Top, Side::Bottom, Side::Left, Side::Right];
        let aligns = [Align::Start, Align::Center, Align::End];
        let mut i = 0;
        while i < 4 {
            let mut j = 0;
            while j < 3 {
                all[i * 3 + j] = Self::new(sides[i], aligns[j]);
                j += 1;
            }
            i += 1;
        }
        all
    };

    /// Creates a placement from a side and an alignment.
    #[must_use]
    pub const fn new(side: Side, align: Align) -> Self {
        Self { side, align }
    }

    /// The same alignment on the opposite side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::new(self.side.opposite(), self.align)
    }

    /// Mirrors the placement for the given text direction.
    ///
    /// Under `Rtl`, horizontal sides swap (`Left` ↔ `Right`) and the
    /// alignment of vertical sides flips (`Start` ↔ `End`), so a
    /// `bottom-start` menu still opens from the reading-order leading edge.
    #[must_use]
    pub const fn mirrored(self, direction: TextDirection) -> Self {
        match direction {
            TextDirection::Ltr => self,
            TextDirection::Rtl => match self.side {
                Side::Left | Side::Right => Self::new(self.side.opposite(), self.align),
                Side::Top | Side::Bottom => Self::new(self.side, self.align.opposite()),
            },
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::new(Side::Bottom, Align::Center)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.align {
            Align::Center => f.write_str(self.side.as_str()),
            Align::Start => write!(f, "{}-start", self.side.as_str()),
            Align::End => write!(f, "{}-end", self.side.as_str()),
        }
    }
}

/// Error returned when parsing a string that names no canonical placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParsePlacementError;

impl fmt::Display for ParsePlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not a canonical placement")
    }
}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (side, align) = match s.split_once('-') {
            Some((side, "start")) => (side, Align::Start),
            Some((side, "end")) => (side, Align::End),
            Some(_) => return Err(ParsePlacementError),
            None => (s, Align::Center),
        };
        let side = match side {
            "top" => Side::Top,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            "right" => Side::Right,
            _ => return Err(ParsePlacementError),
        };
        Ok(Self::new(side, align))
    }
}

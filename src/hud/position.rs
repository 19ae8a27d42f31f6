// SPDX-License-Identifier: MPL-2.0
//! Screen anchors for the overlay card.
//!
//! A [`Position`] names one of nine placements. [`position_to_alignment`]
//! turns it into a horizontal/vertical alignment pair with no dependency on
//! the GUI toolkit; conversions into Iced alignment types live at the bottom
//! of this module.

use std::fmt;
use std::str::FromStr;

/// One of the nine named screen placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    LeftCenter,
    Center,
    #[default]
    RightCenter,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// Every anchor, in reading order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::LeftCenter,
        Position::Center,
        Position::RightCenter,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Returns the wire name (`"right-center"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::LeftCenter => "left-center",
            Position::Center => "center",
            Position::RightCenter => "right-center",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name any anchor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown overlay position: {0:?}")]
pub struct UnknownPosition(pub String);

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == normalized)
            .ok_or_else(|| UnknownPosition(raw.to_string()))
    }
}

/// Horizontal placement along the screen width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    Start,
    Center,
    End,
}

/// Vertical placement along the screen height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Top,
    Center,
    Bottom,
}

/// Maps an anchor to the alignment pair used to place the card.
#[must_use]
pub fn position_to_alignment(position: Position) -> (Horizontal, Vertical) {
    match position {
        Position::TopLeft => (Horizontal::Start, Vertical::Top),
        Position::TopCenter => (Horizontal::Center, Vertical::Top),
        Position::TopRight => (Horizontal::End, Vertical::Top),
        Position::LeftCenter => (Horizontal::Start, Vertical::Center),
        Position::Center => (Horizontal::Center, Vertical::Center),
        Position::RightCenter => (Horizontal::End, Vertical::Center),
        Position::BottomLeft => (Horizontal::Start, Vertical::Bottom),
        Position::BottomCenter => (Horizontal::Center, Vertical::Bottom),
        Position::BottomRight => (Horizontal::End, Vertical::Bottom),
    }
}

impl From<Horizontal> for iced::alignment::Horizontal {
    fn from(value: Horizontal) -> Self {
        match value {
            Horizontal::Start => iced::alignment::Horizontal::Left,
            Horizontal::Center => iced::alignment::Horizontal::Center,
            Horizontal::End => iced::alignment::Horizontal::Right,
        }
    }
}

impl From<Vertical> for iced::alignment::Vertical {
    fn from(value: Vertical) -> Self {
        match value {
            Vertical::Top => iced::alignment::Vertical::Top,
            Vertical::Center => iced::alignment::Vertical::Center,
            Vertical::Bottom => iced::alignment::Vertical::Bottom,
        }
    }
}

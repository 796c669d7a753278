//! Gesture labels and the gesture dictionary.
//!
//! The dictionary is the single source of user-facing gesture text. Display
//! layers and speech output look names and descriptions up here instead of
//! formatting the enum themselves.

use std::fmt;
use std::str::FromStr;

use handsign_common::error::HandsignError;
use serde::{Deserialize, Serialize};

/// The closed set of static hand gestures the classifier can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureLabel {
    /// Ambiguous pose, malformed input, or no hand at all.
    None,
    OpenHand,
    ClosedFist,
    ThumbsUp,
    ThumbsDown,
    Victory,
    Pointing,
    /// Thumb, index and pinky extended ("I love you").
    #[serde(rename = "love")]
    LoveSign,
}

/// Dictionary entry for one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GestureInfo {
    pub label: GestureLabel,
    /// Short identifier, stable across releases.
    pub id: &'static str,
    /// Display name, also used as the spoken text.
    pub name: &'static str,
    pub description: &'static str,
}

/// Gesture dictionary, ordered like [`GestureLabel::ALL`].
pub static GESTURE_DICTIONARY: [GestureInfo; 8] = [
    GestureInfo {
        label: GestureLabel::None,
        id: "none",
        name: "No Gesture",
        description: "No recognizable hand gesture detected.",
    },
    GestureInfo {
        label: GestureLabel::OpenHand,
        id: "open_hand",
        name: "Open Hand",
        description: "All fingers are extended. Used for waving or stopping.",
    },
    GestureInfo {
        label: GestureLabel::ClosedFist,
        id: "closed_fist",
        name: "Closed Fist",
        description: "All fingers are curled inwards. Symbolizes strength or rock.",
    },
    GestureInfo {
        label: GestureLabel::ThumbsUp,
        id: "thumbs_up",
        name: "Thumbs Up",
        description: "Thumb extended upward. Indicates approval or good job.",
    },
    GestureInfo {
        label: GestureLabel::ThumbsDown,
        id: "thumbs_down",
        name: "Thumbs Down",
        description: "Thumb extended downward. Indicates disapproval.",
    },
    GestureInfo {
        label: GestureLabel::Victory,
        id: "victory",
        name: "Victory",
        description: "Index and middle fingers extended in a V shape.",
    },
    GestureInfo {
        label: GestureLabel::Pointing,
        id: "pointing",
        name: "Pointing",
        description: "Index finger extended, others curled. Used to point.",
    },
    GestureInfo {
        label: GestureLabel::LoveSign,
        id: "love",
        name: "I Love You",
        description: "Thumb, Index, and Pinky extended. Signifies love.",
    },
];

impl GestureLabel {
    /// Every label, in dictionary order.
    pub const ALL: [GestureLabel; 8] = [
        GestureLabel::None,
        GestureLabel::OpenHand,
        GestureLabel::ClosedFist,
        GestureLabel::ThumbsUp,
        GestureLabel::ThumbsDown,
        GestureLabel::Victory,
        GestureLabel::Pointing,
        GestureLabel::LoveSign,
    ];

    /// Dictionary entry for this label.
    pub fn info(self) -> &'static GestureInfo {
        let slot = match self {
            Self::None => 0,
            Self::OpenHand => 1,
            Self::ClosedFist => 2,
            Self::ThumbsUp => 3,
            Self::ThumbsDown => 4,
            Self::Victory => 5,
            Self::Pointing => 6,
            Self::LoveSign => 7,
        };
        &GESTURE_DICTIONARY[slot]
    }

    pub fn id(self) -> &'static str {
        self.info().id
    }

    pub fn display_name(self) -> &'static str {
        self.info().name
    }

    pub fn description(self) -> &'static str {
        self.info().description
    }

    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for GestureLabel {
    type Err = HandsignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GESTURE_DICTIONARY
            .iter()
            .find(|info| info.id == s)
            .map(|info| info.label)
            .ok_or_else(|| HandsignError::parse(format!("unknown gesture id: {s}")))
    }
}

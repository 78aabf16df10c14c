use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// A participant's status for one candidate date.
///
/// Answers store symbols as plain strings; this type is for presentation and
/// is never used to reject a submission.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AvailabilitySymbol {
    /// ◯
    Yes,
    /// △
    Maybe,
    /// ✗
    No,
}

impl AvailabilitySymbol {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Yes => "◯",
            Self::Maybe => "△",
            Self::No => "✗",
        }
    }

    /// Accepts the wire name (`yes`) or the glyph (`◯`).
    pub fn parse(value: &str) -> Option<Self> {
        value.parse::<Self>().ok().or(match value {
            "◯" => Some(Self::Yes),
            "△" => Some(Self::Maybe),
            "✗" => Some(Self::No),
            _ => None,
        })
    }
}

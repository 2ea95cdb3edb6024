use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a questionnaire item, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u16);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u16> for QuestionId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// Six-point answer scale a question is presented with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Frequency,
    Quantity,
}

impl Scale {
    pub const fn ordered() -> [Self; 2] {
        [Self::Frequency, Self::Quantity]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Frequency => "Frequency",
            Self::Quantity => "Quantity",
        }
    }
}

/// One `(value, label)` pair of an option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: u8,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
    pub scale: Scale,
}

/// Whether a dimension measures what a person wants from others or what they express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Wanted,
    Expressed,
}

impl Direction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wanted => "Wanted",
            Self::Expressed => "Expressed",
        }
    }
}

/// Interpersonal need measured by a wanted/expressed dimension pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    Inclusion,
    Control,
    Affection,
}

impl Area {
    pub const fn ordered() -> [Self; 3] {
        [Self::Inclusion, Self::Control, Self::Affection]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Inclusion => "Inclusion",
            Self::Control => "Control",
            Self::Affection => "Affection",
        }
    }

    pub const fn wanted(self) -> Dimension {
        match self {
            Self::Inclusion => Dimension::WantedInclusion,
            Self::Control => Dimension::WantedControl,
            Self::Affection => Dimension::WantedAffection,
        }
    }

    pub const fn expressed(self) -> Dimension {
        match self {
            Self::Inclusion => Dimension::ExpressedInclusion,
            Self::Control => Dimension::ExpressedControl,
            Self::Affection => Dimension::ExpressedAffection,
        }
    }
}

/// The six scored sub-scales of the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    WantedInclusion,
    ExpressedInclusion,
    WantedControl,
    ExpressedControl,
    WantedAffection,
    ExpressedAffection,
}

impl Dimension {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::WantedInclusion,
            Self::ExpressedInclusion,
            Self::WantedControl,
            Self::ExpressedControl,
            Self::WantedAffection,
            Self::ExpressedAffection,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::WantedInclusion => "Wanted Inclusion",
            Self::ExpressedInclusion => "Expressed Inclusion",
            Self::WantedControl => "Wanted Control",
            Self::ExpressedControl => "Expressed Control",
            Self::WantedAffection => "Wanted Affection",
            Self::ExpressedAffection => "Expressed Affection",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::WantedInclusion => "wanted_inclusion",
            Self::ExpressedInclusion => "expressed_inclusion",
            Self::WantedControl => "wanted_control",
            Self::ExpressedControl => "expressed_control",
            Self::WantedAffection => "wanted_affection",
            Self::ExpressedAffection => "expressed_affection",
        }
    }

    pub const fn area(self) -> Area {
        match self {
            Self::WantedInclusion | Self::ExpressedInclusion => Area::Inclusion,
            Self::WantedControl | Self::ExpressedControl => Area::Control,
            Self::WantedAffection | Self::ExpressedAffection => Area::Affection,
        }
    }

    pub const fn direction(self) -> Direction {
        match self {
            Self::WantedInclusion | Self::WantedControl | Self::WantedAffection => {
                Direction::Wanted
            }
            Self::ExpressedInclusion | Self::ExpressedControl | Self::ExpressedAffection => {
                Direction::Expressed
            }
        }
    }
}

/// Qualitative label for a wanted/expressed score pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperament {
    Melancholic,
    Supine,
    Choleric,
    Sanguine,
}

impl Temperament {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Melancholic => "Melancholic",
            Self::Supine => "Supine",
            Self::Choleric => "Choleric",
            Self::Sanguine => "Sanguine",
        }
    }
}

impl fmt::Display for Temperament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_ids_honour_width_and_alignment() {
        assert_eq!(format!("{:>2}", QuestionId(1)), " 1");
        assert_eq!(format!("{:<3}|", QuestionId(7)), "7  |");
        assert_eq!(format!("{:02}", QuestionId(9)), "09");
        assert_eq!(QuestionId(54).to_string(), "54");
    }

    #[test]
    fn every_area_pairs_one_wanted_and_one_expressed_dimension() {
        for area in Area::ordered() {
            assert_eq!(area.wanted().area(), area);
            assert_eq!(area.expressed().area(), area);
            assert_eq!(area.wanted().direction(), Direction::Wanted);
            assert_eq!(area.expressed().direction(), Direction::Expressed);
        }
    }

    #[test]
    fn dimension_keys_match_serde_names() {
        for dimension in Dimension::ordered() {
            let encoded = serde_json::to_value(dimension).expect("dimension serializes");
            assert_eq!(encoded.as_str(), Some(dimension.key()));
        }
    }
}

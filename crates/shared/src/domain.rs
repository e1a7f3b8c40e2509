use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned record identifier. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Committee,
    Preceptor,
    Chairperson,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [Self::Committee, Self::Preceptor, Self::Chairperson];

    /// Collection path under the API base URL.
    pub fn default_path(self) -> &'static str {
        match self {
            Self::Committee => "samitis",
            Self::Preceptor => "acharyas",
            Self::Chairperson => "adhyakshs",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Committee => "committee",
            Self::Preceptor => "preceptor",
            Self::Chairperson => "chairperson",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Number of digits a phone number must carry to be submittable.
pub const PHONE_DIGITS: usize = 10;

/// Strips every non-digit and keeps at most [`PHONE_DIGITS`] characters.
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect()
}

pub fn is_valid_phone(number: &str) -> bool {
    number.len() == PHONE_DIGITS && number.bytes().all(|b| b.is_ascii_digit())
}

/// A category color a committee entry can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub label: &'static str,
    pub value: &'static str,
    pub hex: &'static str,
}

pub const COLOR_OPTIONS: [ColorOption; 2] = [
    ColorOption {
        label: "Main",
        value: "blue",
        hex: "#392d74",
    },
    ColorOption {
        label: "Peta",
        value: "purple",
        hex: "#9f2886",
    },
];

pub const UNKNOWN_COLOR_LABEL: &str = "Unknown";
pub const UNKNOWN_COLOR_VALUE: &str = "unknown";
const UNKNOWN_COLOR_HEX: &str = "#000000";

/// Display triple for a stored color. Unrecognized inputs degrade to an
/// `Unknown` label instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorInfo {
    pub label: String,
    pub value: String,
    pub hex: String,
}

impl ColorInfo {
    pub fn is_known(&self) -> bool {
        self.label != UNKNOWN_COLOR_LABEL
    }
}

impl From<ColorOption> for ColorInfo {
    fn from(option: ColorOption) -> Self {
        Self {
            label: option.label.to_string(),
            value: option.value.to_string(),
            hex: option.hex.to_string(),
        }
    }
}

pub fn color_option_by_value(value: &str) -> Option<ColorOption> {
    COLOR_OPTIONS.iter().copied().find(|o| o.value == value)
}

pub fn color_option_by_hex(hex: &str) -> Option<ColorOption> {
    COLOR_OPTIONS
        .iter()
        .copied()
        .find(|o| o.hex.eq_ignore_ascii_case(hex))
}

pub fn color_info_from_hex(hex: &str) -> ColorInfo {
    color_option_by_hex(hex)
        .map(ColorInfo::from)
        .unwrap_or_else(|| ColorInfo {
            label: UNKNOWN_COLOR_LABEL.to_string(),
            value: UNKNOWN_COLOR_VALUE.to_string(),
            hex: hex.to_string(),
        })
}

pub fn color_info_from_value(value: &str) -> ColorInfo {
    color_option_by_value(value)
        .map(ColorInfo::from)
        .unwrap_or_else(|| ColorInfo {
            label: UNKNOWN_COLOR_LABEL.to_string(),
            value: value.to_string(),
            hex: UNKNOWN_COLOR_HEX.to_string(),
        })
}

/// Maps a stored color back to the option value shown in an edit form.
/// Hex strings are reverse-mapped, anything else is taken as an option value.
pub fn stored_color_to_value(stored: &str) -> String {
    if stored.starts_with('#') {
        color_info_from_hex(stored).value
    } else {
        stored.to_string()
    }
}

const BUILTIN_COMMITTEE_NAMES: [&str; 20] = [
    "સંકલન સમિતિ",
    "સ્ટેજ અને રંગોળી સમિતિ",
    "સાંસ્કૃતિક સમિતિ",
    "પ્રસાદી સમિતિ",
    "ગુરુ દીક્ષા/ પાદુકા પૂજન સમિતિ",
    "એન્કરીન સમિતિ",
    "સાઉન્ડ લાઈવ સમિતિ",
    "રજીસ્ટ્રેશન સમિતિ",
    "સ્વાગત સમિતિ",
    "બેઠક સમિતિ",
    "ડોનેશન સમિતિ",
    "સાહિત્ય સમિતિ",
    "ધૂપ સમિતિ",
    "રસોડા વિભાગ સમિતિ",
    "ભોજન વિતરણ સમિતિ",
    "પાણી સમિતિ",
    "પાર્કિંગ સમિતિ",
    "પગરખા સમિતિ",
    "નાઇટ સિક્યુરિટી સમિતિ",
    "વાઈન્ડ અપ સમિતિ",
];

/// The set of committee names a committee entry may carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitteeCatalog {
    names: Vec<String>,
}

impl CommitteeCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            let trimmed = name.trim();
            if !trimmed.is_empty() && !unique.iter().any(|n| n == trimmed) {
                unique.push(trimmed.to_string());
            }
        }
        Self { names: unique }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_COMMITTEE_NAMES)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CommitteeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

//! Field kinds and subtypes a column or constant can be mapped to.

use serde::{Deserialize, Serialize};

/// The vCard semantics assigned to an input column or constant value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Name,
    Suffix,
    PhoneNumber,
    Email,
    Organization,
    JobTitle,
    Address,
    Note,
    /// Explicitly unmapped. Entries of this kind never enter a mapping set.
    None,
}

impl FieldKind {
    /// All kinds in presentation order, including `None`.
    pub const ALL: [Self; 9] = [
        Self::Name,
        Self::Suffix,
        Self::PhoneNumber,
        Self::Email,
        Self::Organization,
        Self::JobTitle,
        Self::Address,
        Self::Note,
        Self::None,
    ];

    /// Human-readable label for listings and summaries.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Suffix => "Suffix",
            Self::PhoneNumber => "Phone Number",
            Self::Email => "Email",
            Self::Organization => "Organization",
            Self::JobTitle => "Job Title",
            Self::Address => "Address",
            Self::Note => "Note",
            Self::None => "None",
        }
    }

    /// True for kinds whose rendering is qualified by a [`Subtype`].
    #[must_use]
    pub fn has_subtype(self) -> bool {
        matches!(self, Self::PhoneNumber | Self::Email)
    }
}

/// Secondary qualifier for phone numbers and email addresses.
///
/// A single enum covers both kinds; the renderer decides which variants
/// carry a type tag for a given field kind (`Other` is tagged for email
/// but not for phone).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Subtype {
    Mobile,
    Work,
    Home,
    Other,
    #[default]
    Unspecified,
}

impl Subtype {
    /// Human-readable label for listings and summaries.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::Work => "Work",
            Self::Home => "Home",
            Self::Other => "Other",
            Self::Unspecified => "Unspecified",
        }
    }
}

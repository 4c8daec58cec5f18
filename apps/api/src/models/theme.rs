//! Presentation themes. The `theme` field of a portfolio is a contract with the
//! rendering layer: it is always one of these eight identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeId {
    #[default]
    ModernDark,
    MinimalLight,
    CreativeGradient,
    ProfessionalBlue,
    StartupGreen,
    DesignerPurple,
    TechNeon,
    CorporateGray,
}

impl ThemeId {
    pub const ALL: [ThemeId; 8] = [
        ThemeId::ModernDark,
        ThemeId::MinimalLight,
        ThemeId::CreativeGradient,
        ThemeId::ProfessionalBlue,
        ThemeId::StartupGreen,
        ThemeId::DesignerPurple,
        ThemeId::TechNeon,
        ThemeId::CorporateGray,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::ModernDark => "modern-dark",
            ThemeId::MinimalLight => "minimal-light",
            ThemeId::CreativeGradient => "creative-gradient",
            ThemeId::ProfessionalBlue => "professional-blue",
            ThemeId::StartupGreen => "startup-green",
            ThemeId::DesignerPurple => "designer-purple",
            ThemeId::TechNeon => "tech-neon",
            ThemeId::CorporateGray => "corporate-gray",
        }
    }

    /// Lookup used by theme consumers: absent or unknown values render with the default theme.
    pub fn or_default(value: Option<&str>) -> ThemeId {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeId {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Serde helper for stored documents, where the theme is read back leniently.
pub fn deserialize_or_default<'de, D>(deserializer: D) -> Result<ThemeId, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(ThemeId::or_default(raw.as_deref()))
}

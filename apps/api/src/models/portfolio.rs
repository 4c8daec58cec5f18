use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::theme::{self, ThemeId};

/// A user's submission. Field presence and lengths are checked by the handler
/// before the generation pipeline sees it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioInput {
    pub name: String,
    pub career_summary: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub portfolio_style: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub design_reference: Option<String>,
    #[serde(default)]
    pub color_preference: Option<String>,
    #[serde(default)]
    pub layout_style: Option<String>,
}

/// Returns the value if it holds anything besides whitespace.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<String>,
}

/// Headline numbers. Display strings such as "5+" or "10K+", not counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub years_experience: String,
    pub projects_completed: String,
    pub clients_satisfied: String,
    pub code_commits: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub position: String,
    pub company: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// LLM output after schema validation. Only `response_parser` constructs this
/// from model text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub headline: String,
    pub enhanced_career_summary: String,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub stats: Stats,
    pub certifications: Vec<Certification>,
    pub education: Vec<Education>,
    pub testimonials: Vec<Testimonial>,
    pub services: Vec<Service>,
    pub theme: ThemeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<SocialLink>>,
}

/// The persistable portfolio record handed to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub name: String,
    pub slug: String,
    pub headline: String,
    pub career_summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub stats: Stats,
    pub certifications: Vec<Certification>,
    pub education: Vec<Education>,
    pub testimonials: Vec<Testimonial>,
    pub services: Vec<Service>,
    #[serde(default, deserialize_with = "theme::deserialize_or_default")]
    pub theme: ThemeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    pub generated_at: DateTime<Utc>,
}

/// Identifiers returned by the store after a successful create.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedPortfolio {
    pub id: Uuid,
    pub slug: String,
}

/// A document as read back from the store.
#[derive(Debug, Clone, Serialize)]
pub struct StoredPortfolio {
    pub id: Uuid,
    #[serde(flatten)]
    pub document: PortfolioDocument,
}

//! Portfolio generation: orchestrates the full pipeline for one request.
//!
//! Flow: resolve style → build prompt → LLM complete → parse/validate →
//!       assemble document.
//!
//! Exactly one completion per request. A failure at the completion or parse
//! step ends the request; no partial document is produced.

use crate::generation::assembler::assemble;
use crate::generation::error::GenerationError;
use crate::generation::prompts::PORTFOLIO_SYSTEM;
use crate::generation::{prompt_builder, response_parser, style_catalog};
use crate::llm_client::CompletionProvider;
use crate::models::portfolio::{PortfolioDocument, PortfolioInput};

/// Runs the generation pipeline. The caller has already validated `input`
/// and owns persistence of the returned document.
pub async fn generate_portfolio(
    llm: &dyn CompletionProvider,
    input: PortfolioInput,
) -> Result<PortfolioDocument, GenerationError> {
    let (theme, guideline) = style_catalog::resolve(input.portfolio_style.as_deref());

    let prompt = prompt_builder::build(&input, guideline, theme);

    let raw = llm.complete(PORTFOLIO_SYSTEM, &prompt).await?;

    let content = response_parser::parse(&raw, theme)?;

    Ok(assemble(input, content))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use crate::models::theme::ThemeId;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Test double that returns a canned completion and records what it was sent.
    pub(crate) struct ScriptedProvider {
        reply: Mutex<Option<Result<String, LlmError>>>,
        pub(crate) seen: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedProvider {
        pub(crate) fn replying(text: impl Into<String>) -> Self {
            Self::with(Ok(text.into()))
        }

        pub(crate) fn failing(err: LlmError) -> Self {
            Self::with(Err(err))
        }

        fn with(reply: Result<String, LlmError>) -> Self {
            Self {
                reply: Mutex::new(Some(reply)),
                seen: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionProvider for ScriptedProvider {
        async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
            self.seen
                .lock()
                .unwrap()
                .push((system.to_string(), prompt.to_string()));
            self.reply
                .lock()
                .unwrap()
                .take()
                .expect("ScriptedProvider called more than once")
        }
    }

    pub(crate) fn generated_json(theme: &str) -> String {
        json!({
            "headline": "Building category-defining startups from zero to scale",
            "enhancedCareerSummary": "Founder with two exits and $30M raised across ventures.",
            "experience": [
                {
                    "company": "Quillstone Labs",
                    "position": "Founder & CEO",
                    "duration": "2020 - Present",
                    "description": "Scaled to 500K users and closed a $20M Series A."
                },
                {
                    "company": "Harborlight",
                    "position": "Head of Engineering",
                    "duration": "2016 - 2020",
                    "description": "Grew the team from 3 to 40 engineers."
                }
            ],
            "projects": [{
                "title": "Saltmarsh Ledger",
                "description": "Embedded finance API for vertical SaaS.",
                "technologies": ["Go", "Rust", "Postgres"],
                "metrics": "$1B processed"
            }],
            "stats": {
                "yearsExperience": "12+",
                "projectsCompleted": "45+",
                "clientsSatisfied": "80+",
                "codeCommits": "25K+"
            },
            "certifications": [],
            "education": [{
                "degree": "MBA",
                "institution": "INSEAD",
                "year": "2015",
                "details": "Entrepreneurship concentration"
            }],
            "testimonials": [{
                "name": "Tomás Herrera",
                "position": "General Partner",
                "company": "Fieldstone Capital",
                "text": "Jane turns ambiguity into momentum."
            }],
            "services": [{
                "title": "Go-to-market advisory",
                "description": "Pricing and launch strategy for B2B founders.",
                "features": ["Pricing", "Positioning"]
            }],
            "theme": theme
        })
        .to_string()
    }

    pub(crate) fn jane_doe() -> PortfolioInput {
        PortfolioInput {
            name: "Jane Doe".to_string(),
            career_summary:
                "Two-time founder who builds developer platforms and scales engineering teams."
                    .to_string(),
            skills: vec!["Go".to_string(), "Rust".to_string()],
            portfolio_style: Some("Startup Founder".to_string()),
            email: Some("jane@example.com".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_jane_doe_end_to_end() {
        let reply = format!("```json\n{}\n```", generated_json("startup-green"));
        let llm = ScriptedProvider::replying(reply.clone());

        let doc = generate_portfolio(&llm, jane_doe()).await.unwrap();

        let seen = llm.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (system, prompt) = &seen[0];
        assert_eq!(system, PORTFOLIO_SYSTEM);
        assert!(prompt.contains("Dynamic, entrepreneurial, growth-oriented"));
        assert!(prompt.contains("Innovation, scaling, market disruption, venture building"));
        assert!(prompt.contains(r#""theme": "startup-green""#));

        let expected = response_parser::parse(&reply, ThemeId::StartupGreen).unwrap();
        assert_eq!(doc.slug, "jane-doe");
        assert_eq!(doc.skills, vec!["Go", "Rust"]);
        assert_eq!(doc.theme, ThemeId::StartupGreen);
        assert_eq!(doc.headline, expected.headline);
        assert_eq!(doc.career_summary, expected.enhanced_career_summary);
        assert_eq!(doc.experience, expected.experience);
        assert_eq!(doc.projects, expected.projects);
        assert_eq!(doc.stats, expected.stats);
        assert_eq!(doc.education, expected.education);
        assert_eq!(doc.testimonials, expected.testimonials);
        assert_eq!(doc.services, expected.services);
        assert_eq!(doc.email.as_deref(), Some("jane@example.com"));
    }

    #[tokio::test]
    async fn test_provider_failure_is_provider_unavailable() {
        let llm = ScriptedProvider::failing(LlmError::Api {
            status: 503,
            message: "unavailable".to_string(),
        });
        let err = generate_portfolio(&llm, jane_doe()).await.unwrap_err();
        assert!(matches!(err, GenerationError::ProviderUnavailable(_)));
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_completion_is_reported() {
        let llm = ScriptedProvider::failing(LlmError::EmptyContent);
        let err = generate_portfolio(&llm, jane_doe()).await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyCompletion));
    }

    #[tokio::test]
    async fn test_theme_drift_fails_without_retry() {
        let llm = ScriptedProvider::replying(generated_json("tech-neon"));
        let err = generate_portfolio(&llm, jane_doe()).await.unwrap_err();
        assert!(matches!(err, GenerationError::SchemaViolation(_)));
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_unrecognized_style_uses_fallback_theme() {
        let mut input = jane_doe();
        input.portfolio_style = Some("Foo".to_string());
        let llm = ScriptedProvider::replying(generated_json("modern-dark"));

        let doc = generate_portfolio(&llm, input).await.unwrap();
        assert_eq!(doc.theme, ThemeId::ModernDark);
        let seen = llm.seen.lock().unwrap();
        assert!(seen[0].1.contains("STYLE-SPECIFIC REQUIREMENTS for Modern Tech:"));
    }

    #[tokio::test]
    async fn test_prose_reply_is_malformed() {
        let llm = ScriptedProvider::replying("Sorry, I can't help with that.");
        let err = generate_portfolio(&llm, jane_doe()).await.unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }
}

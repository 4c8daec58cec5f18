//! Document assembly: merges caller fields with generated content and derives the slug.

use chrono::{DateTime, Utc};

use crate::models::portfolio::{non_blank, GeneratedContent, PortfolioDocument, PortfolioInput};

/// Derives a URL-safe slug from a display name.
///
/// Lower-cases, drops everything outside `[a-z0-9 -]`, turns whitespace runs
/// into single hyphens, collapses repeated hyphens and trims hyphens at both
/// ends. Uniqueness is the store's concern.
pub fn slugify(name: &str) -> String {
    let kept: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ' || *c == '-')
        .collect();

    let mut slug = String::with_capacity(kept.len());
    for c in kept.chars() {
        let c = if c == ' ' { '-' } else { c };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }

    slug.trim_matches('-').to_string()
}

/// Assembles the persistable document, stamped with the current time.
pub fn assemble(input: PortfolioInput, content: GeneratedContent) -> PortfolioDocument {
    assemble_at(input, content, Utc::now())
}

/// Assembles the persistable document with an explicit generation timestamp.
///
/// `skills` is always the caller's list; narrative fields come from `content`.
pub fn assemble_at(
    input: PortfolioInput,
    content: GeneratedContent,
    generated_at: DateTime<Utc>,
) -> PortfolioDocument {
    let slug = slugify(&input.name);
    let email = non_blank(&input.email).map(str::to_string);
    let phone = non_blank(&input.phone).map(str::to_string);
    let location = non_blank(&input.location).map(str::to_string);

    PortfolioDocument {
        name: input.name,
        slug,
        headline: content.headline,
        career_summary: content.enhanced_career_summary,
        skills: input.skills,
        experience: content.experience,
        projects: content.projects,
        stats: content.stats,
        certifications: content.certifications,
        education: content.education,
        testimonials: content.testimonials,
        services: content.services,
        theme: content.theme,
        email,
        phone,
        location,
        social_links: content.social_links.unwrap_or_default(),
        generated_at,
    }
}

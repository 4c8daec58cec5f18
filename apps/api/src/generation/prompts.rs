// All LLM prompt text for portfolio generation.
// Placeholders are `{name}` style and filled by `prompt_builder::render`.

/// System instruction sent with every portfolio completion.
pub const PORTFOLIO_SYSTEM: &str = "You are an expert portfolio designer and content generator. \
    Create advanced, professional portfolio content that matches modern design trends \
    and the user's stated preferences. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT include explanations or apologies.";

/// Forbids recycled names and figures across generations.
pub const UNIQUENESS_INSTRUCTION: &str = "\
CRITICAL UNIQUENESS REQUIREMENTS:
1. Generate COMPLETELY DIFFERENT content from previous portfolios - vary everything!
2. Use UNIQUE project names (avoid generic names like \"E-commerce Platform\")
3. Create DIVERSE company names and types (startups, enterprises, agencies, etc.)
4. Generate VARIED metrics and numbers (don't repeat same percentages/figures)
5. Use DIFFERENT technologies and skill combinations
6. Create UNIQUE testimonial names and feedback
7. Vary the career progression and experience levels
8. Use fresh, creative language and descriptions";

/// Portfolio generation prompt template.
/// Replace: {name}, {career_summary}, {skills}, {additional_info}, {portfolio_style},
///          {target_audience}, {design_reference}, {color_preference}, {layout_style},
///          {style_name}, {tone}, {focus}, {metrics}, {project_types},
///          {uniqueness_instruction}, {theme}, {handle}
pub const PORTFOLIO_PROMPT_TEMPLATE: &str = r#"Create a UNIQUE, ENTERPRISE-LEVEL portfolio for {name} that is completely different from previous generations.

INPUT INFORMATION:
- Name: {name}
- Career Summary: {career_summary}
- Skills: {skills}
- Additional Info: {additional_info}

DESIGN PREFERENCES:
- Portfolio Style: {portfolio_style}
- Target Audience: {target_audience}
- Design Reference: {design_reference}
- Color Preference: {color_preference}
- Layout Style: {layout_style}

STYLE-SPECIFIC REQUIREMENTS for {style_name}:
- Tone: {tone}
- Focus Areas: {focus}
- Key Metrics: {metrics}
- Project Types: {project_types}

{uniqueness_instruction}

CONTENT GENERATION REQUIREMENTS:
1. Create compelling headline (50-80 chars) matching the style tone
2. Enhance career summary with style-appropriate language and metrics
3. Generate 3-4 work experiences with:
   - UNIQUE company names (vary: startups, corporations, agencies, consultancies)
   - Progressive career growth with varied progression paths
   - Style-appropriate achievements and responsibilities
   - Different metrics and impact statements each time
4. Create 4-6 projects with:
   - CREATIVE, unique project names (avoid repetition!)
   - Style-appropriate project types and descriptions
   - Varied technology stacks and approaches
   - DIFFERENT metrics and impact measurements
   - Mix of professional and innovative projects
5. Professional statistics - use VARIED, realistic numbers
6. Generate relevant certifications and education for the style
7. Create authentic testimonials with varied feedback styles
8. Include style-appropriate service offerings
9. Ensure everything feels fresh, original, and matches the theme: {theme}

THEME ASSIGNMENT: The "theme" field MUST be exactly "{theme}". No other value is accepted.

Return ONLY valid JSON in this exact structure:
{
  "headline": "Compelling professional headline with value proposition",
  "enhancedCareerSummary": "Enhanced, quantified career summary with specific achievements",
  "experience": [
    {
      "company": "Company Name",
      "position": "Job Title",
      "duration": "Jan 2020 - Present",
      "description": "Detailed description with quantified achievements and specific technologies"
    }
  ],
  "projects": [
    {
      "title": "Project Name",
      "description": "Detailed project description with problem solved, solution implemented, and quantified results",
      "technologies": ["Tech1", "Tech2", "Tech3", "Tech4"],
      "link": "https://project-demo.com",
      "metrics": "Specific metrics like '40% performance improvement' or '10K+ users'"
    }
  ],
  "stats": {
    "yearsExperience": "5+",
    "projectsCompleted": "200+",
    "clientsSatisfied": "50+",
    "codeCommits": "10K+"
  },
  "certifications": [
    {
      "name": "Certification Name",
      "issuer": "Organization",
      "year": "2023"
    }
  ],
  "education": [
    {
      "degree": "Degree Name",
      "institution": "University/School",
      "year": "2020",
      "details": "Relevant coursework or achievements"
    }
  ],
  "testimonials": [
    {
      "name": "Client/Colleague Name",
      "position": "Their Job Title",
      "company": "Their Company",
      "text": "Professional testimonial highlighting specific skills and results"
    }
  ],
  "services": [
    {
      "title": "Service Name",
      "description": "What this service includes and benefits",
      "features": ["Feature 1", "Feature 2", "Feature 3"]
    }
  ],
  "theme": "{theme}",
  "socialLinks": [
    {
      "platform": "LinkedIn",
      "url": "https://linkedin.com/in/{handle}"
    },
    {
      "platform": "GitHub",
      "url": "https://github.com/{handle}"
    }
  ]
}"#;

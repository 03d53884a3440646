//! Assembling the text of a CV "Projects" section.
//!
//! Entries come from a form: each has a title and four free-text fields. The
//! functions here turn them into the plain text that is either sent to a
//! language model for rewriting or laid out directly.

/// One project as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    /// What it is
    pub what: String,
    /// Tech stack
    pub stack: String,
    /// Key capabilities
    pub capabilities: String,
    pub impact: String,
}

/// Instruction placed ahead of the projects when asking for a rewrite
pub const CV_REWRITE_INSTRUCTION: &str = "Rewrite the projects below into a professional CV \
     Projects section. Use concise ATS-friendly bullet points and keep each project clear \
     and impact-oriented.";

impl Project {
    pub fn new<S: Into<String>>(
        title: S,
        what: S,
        stack: S,
        capabilities: S,
        impact: S,
    ) -> Project {
        Project {
            title: title.into(),
            what: what.into(),
            stack: stack.into(),
            capabilities: capabilities.into(),
            impact: impact.into(),
        }
    }

    /// The same project with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Project {
        Project {
            title: self.title.trim().to_string(),
            what: self.what.trim().to_string(),
            stack: self.stack.trim().to_string(),
            capabilities: self.capabilities.trim().to_string(),
            impact: self.impact.trim().to_string(),
        }
    }

    fn labelled_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("What it is", self.what.as_str()),
            ("Tech stack", self.stack.as_str()),
            ("Key capabilities", self.capabilities.as_str()),
            ("Impact", self.impact.as_str()),
        ]
    }
}

/// Trimmed projects that have a title; untitled entries are treated as unused form slots
fn titled(projects: &[Project]) -> Vec<Project> {
    projects
        .iter()
        .map(Project::trimmed)
        .filter(|project| !project.title.is_empty())
        .collect()
}

/// The three sample projects a blank form starts out with
pub fn default_projects() -> Vec<Project> {
    vec![
        Project::new(
            "CV & Cover Letter Portfolio Manager",
            "A database-driven portfolio manager for multi-profile CV versions and template-based cover letter exports.",
            "Python, Streamlit, SQLite, ReportLab, python-docx",
            "Profile-based CV/cover letter versioning, autofill from sender details, justified professional layouts, exports to HTML/PDF/DOCX/TXT, password-protected editor with a public portfolio view.",
            "Accelerates tailored document creation across roles with consistent formatting and a centralized portfolio.",
        ),
        Project::new(
            "End-to-End Sentiment Analysis App",
            "A full-stack sentiment analysis tool with local LLM inference.",
            "Python, FastAPI, Streamlit, Ollama (Mistral) for on-device inference",
            "REST API for sentiment classification (Positive/Negative/Neutral), real-time predictions in a Streamlit UI, environment-aware backend config, robust API error handling.",
            "Enables quick experimentation with prompts and models while keeping inference on local hardware, reducing dependency on external services.",
        ),
        Project::new(
            "Text Summarizer Web App",
            "A local LLM-powered text summarization web app with a REST API.",
            "LLaMA (via Ollama), FastAPI, Streamlit",
            "REST endpoint (POST /summarize) returning summaries, real-time UI for submission and results, on-device inference for low latency, reproducible dev setup.",
            "Provides fast, offline NLP prototyping suitable for rapid feature testing and demonstrations.",
        ),
    ]
}

/// Labelled text for every titled project, separated by blank lines.
/// `None` when no project has a title.
pub fn projects_text(projects: &[Project]) -> Option<String> {
    let projects = titled(projects);
    if projects.is_empty() {
        return None;
    }

    let blocks: Vec<String> = projects
        .iter()
        .map(|project| {
            let mut block = format!("Title: {}", project.title);
            for (label, value) in project.labelled_fields() {
                block.push_str(&format!("\n{label}: {value}"));
            }
            block
        })
        .collect();
    Some(blocks.join("\n\n"))
}

/// Every technology named in the titled projects' tech stacks, comma
/// separated, first mention wins when names repeat in any case
pub fn tech_keywords(projects: &[Project]) -> String {
    let mut seen: Vec<String> = Vec::new();
    let mut keywords: Vec<String> = Vec::new();
    for project in titled(projects) {
        for tech in project.stack.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let key = tech.to_lowercase();
            if !seen.contains(&key) {
                seen.push(key);
                keywords.push(tech.to_string());
            }
        }
    }
    keywords.join(", ")
}

/// Prompt asking a language model to rewrite the projects as a CV section
pub fn cv_rewrite_prompt(projects: &[Project]) -> Option<String> {
    projects_text(projects).map(|text| format!("{CV_REWRITE_INSTRUCTION}\n\n{text}"))
}

/// Prompt asking a language model for a summary of `text`; `None` for blank text
pub fn summarize_prompt(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    Some(format!("Summarize this:\n\n{text}"))
}

/// A bulleted outline of the titled projects, ready to lay out:
///
/// ```text
/// - Widget Factory
///   - Builds widgets at scale
///   - Tech stack: Rust, Kubernetes
/// ```
///
/// Empty fields are skipped; projects are separated by a blank line.
pub fn projects_outline(projects: &[Project]) -> String {
    titled(projects)
        .iter()
        .map(|project| {
            let mut block = format!("- {}", project.title);
            if !project.what.is_empty() {
                block.push_str(&format!("\n  - {}", project.what));
            }
            // the description reads as its own bullet; the rest keep their labels
            for (label, value) in project.labelled_fields().into_iter().skip(1) {
                if !value.is_empty() {
                    block.push_str(&format!("\n  - {label}: {value}"));
                }
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_factory() -> Project {
        Project::new(
            " Widget Factory ",
            "Builds widgets at scale",
            "Rust, Kubernetes",
            "",
            "",
        )
    }

    #[test]
    fn text_skips_untitled_projects() {
        let projects = vec![
            widget_factory(),
            Project {
                title: "   ".into(),
                what: "ignored".into(),
                ..Default::default()
            },
        ];
        let text = projects_text(&projects).unwrap();
        assert_eq!(
            text,
            "Title: Widget Factory\nWhat it is: Builds widgets at scale\nTech stack: Rust, Kubernetes\nKey capabilities: \nImpact: "
        );
        assert!(!text.contains("ignored"));
    }

    #[test]
    fn nothing_titled_means_nothing_to_send() {
        assert_eq!(projects_text(&[Project::default()]), None);
        assert_eq!(cv_rewrite_prompt(&[]), None);
    }

    #[test]
    fn rewrite_prompt_leads_with_the_instruction() {
        let prompt = cv_rewrite_prompt(&default_projects()).unwrap();
        assert!(prompt.starts_with("Rewrite the projects below into a professional CV Projects section."));
        assert!(prompt.contains("and impact-oriented.\n\nTitle: CV & Cover Letter Portfolio Manager\n"));
        assert_eq!(prompt.matches("Title: ").count(), 3);
        assert_eq!(prompt.matches("\n\nTitle: ").count(), 3);
    }

    #[test]
    fn keywords_are_deduplicated() {
        let projects = vec![
            widget_factory(),
            Project::new("Gizmo", "", "rust, Postgres,, ", "", ""),
        ];
        assert_eq!(tech_keywords(&projects), "Rust, Kubernetes, Postgres");
        assert_eq!(tech_keywords(&[]), "");
    }

    #[test]
    fn summarize_prompt_requires_text() {
        assert_eq!(summarize_prompt(" \n"), None);
        assert_eq!(summarize_prompt("abc").as_deref(), Some("Summarize this:\n\nabc"));
    }

    #[test]
    fn outline_matches_the_bullet_layout() {
        let outline = projects_outline(&[widget_factory()]);
        assert_eq!(
            outline,
            "- Widget Factory\n  - Builds widgets at scale\n  - Tech stack: Rust, Kubernetes"
        );
    }

    #[test]
    fn outline_separates_projects_with_blank_lines() {
        let outline = projects_outline(&default_projects());
        assert_eq!(outline.matches("\n\n- ").count(), 2);
        assert!(outline.starts_with("- CV & Cover Letter Portfolio Manager\n  - A database-driven"));
    }
}

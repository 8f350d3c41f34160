//! Portfolio page content
//!
//! The page text is loaded from a bundled RON asset (see `assets/portfolio.ron`)
//! so it can be edited without touching the layout code.

use bevy::log::warn;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// A card in the "Selected Projects" grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Short category label (e.g., "ML", "IoT")
    pub tag: String,
    #[serde(default = "placeholder_link")]
    pub case_study_url: String,
    #[serde(default = "placeholder_link")]
    pub code_url: String,
}

fn placeholder_link() -> String {
    "#".to_string()
}

/// Contact card shown beside the about section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContactInfo {
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub links: Vec<String>,
}

/// "Let's build something" section. The form only collects text locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub title: String,
    pub name_placeholder: String,
    pub email_placeholder: String,
    pub message_placeholder: String,
    pub submit_label: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            title: "Let's build something".to_string(),
            name_placeholder: "Your name".to_string(),
            email_placeholder: "Email".to_string(),
            message_placeholder: "Tell me about your project".to_string(),
            submit_label: "Send message".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
pub struct PortfolioContent {
    pub name: String,
    pub role: String,
    pub headline: String,
    /// Highlighted tail of the headline
    pub headline_accent: String,
    pub intro: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub resume_url: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub about: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub contact_form: ContactForm,
    pub footer: String,
}

impl PortfolioContent {
    pub fn from_ron_str(text: &str) -> Result<Self, String> {
        ron::from_str(text).map_err(|e| format!("Failed to parse portfolio content: {e}"))
    }

    /// Load the bundled content asset.
    pub fn load() -> Self {
        let text = include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/assets/portfolio.ron"
        ));
        match Self::from_ron_str(text) {
            Ok(content) => content,
            Err(e) => {
                warn!("{e}");
                Self::placeholder()
            }
        }
    }

    /// Minimal content when the bundled asset is broken.
    pub fn placeholder() -> Self {
        Self {
            name: "Portfolio".to_string(),
            role: String::new(),
            headline: "Hello".to_string(),
            headline_accent: String::new(),
            intro: String::new(),
            skills: Vec::new(),
            resume_url: String::new(),
            projects: Vec::new(),
            about: String::new(),
            highlights: Vec::new(),
            contact: ContactInfo::default(),
            contact_form: ContactForm::default(),
            footer: String::new(),
        }
    }

    /// Up to two uppercase initials for the header avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    /// Footer with the copyright year in front.
    pub fn footer_line(&self, year: i32) -> String {
        if self.footer.is_empty() {
            format!("© {year}")
        } else {
            format!("© {year} {}", self.footer)
        }
    }
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self::load()
    }
}

//! System prompt template: persona, scope rules, tone, planning steps and business data.

use std::fs;
use std::io;
use std::path::Path;

/// Bundled template used when no replacement file is configured.
pub const DEFAULT_SYSTEM_PROMPT: &str = include_str!("../templates/system_prompt.txt");

/// Label that introduces the caller's custom instruction at the end of the system message.
pub const CUSTOM_PROMPT_LABEL: &str = "Custom prompt: ";

/// The static instructional block sent ahead of the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPrompt {
    template: String,
}

impl Default for SystemPrompt {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT)
    }
}

impl SystemPrompt {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Reads a template from `path`. A blank file is rejected.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let template = fs::read_to_string(path.as_ref())?;
        if template.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("system prompt file is empty: {}", path.as_ref().display()),
            ));
        }
        Ok(Self::new(template))
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Template, a blank line, then `Custom prompt: {custom_prompt}` (label kept when empty).
    pub fn render(&self, custom_prompt: &str) -> String {
        format!(
            "{}\n\n{}{}",
            self.template.trim_end(),
            CUSTOM_PROMPT_LABEL,
            custom_prompt
        )
    }
}

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// A fill-in-the-blanks story: a template with `{prompt}` placeholders and
/// the ordered list of prompts to ask for.
pub struct Story {
    prompts: Vec<&'static str>,
    template: &'static str,
}

impl Story {
    pub fn new(prompts: Vec<&'static str>, template: &'static str) -> Self {
        Self { prompts, template }
    }

    pub fn prompts(&self) -> &[&'static str] {
        &self.prompts
    }

    /// Substitute every `{prompt}` placeholder with the submitted answer.
    /// Unanswered prompts collapse to an empty string.
    pub fn generate(&self, answers: &HashMap<String, String>) -> String {
        let mut text = self.template.to_string();
        for prompt in &self.prompts {
            let placeholder = format!("{{{}}}", prompt);
            let answer = answers.get(*prompt).map(String::as_str).unwrap_or("");
            text = text.replace(&placeholder, answer);
        }
        text
    }
}

pub static STORY: Lazy<Story> = Lazy::new(|| {
    Story::new(
        vec!["place", "noun", "verb", "adjective", "plural_noun"],
        "Once upon a time in a long-ago {place}, there lived a large {adjective} {noun}. It loved to {verb} {plural_noun}.",
    )
});

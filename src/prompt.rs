/// System instruction sent ahead of every roadmap prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are an AI roadmap generator. Always respond with valid JSON arrays containing roadmap data.";

/// Builds the user prompt for `topic`.
///
/// The topic is substituted verbatim; no escaping or length checks are applied.
#[must_use]
pub fn build_roadmap_prompt(topic: &str) -> String {
    format!(
        r#"Generate a comprehensive roadmap for learning {topic}. Include all necessary topics, concepts, and steps from beginner to advanced levels.

The roadmap should be structured in this format:
[
    {{
        "title": "{topic} Roadmap",
        "sections": [
          {{
            "title": "Section Title",
            "items": [
              "Item 1",
              "Item 2"
            ]
          }}
        ]
    }}
]

Provide only the JSON array, no additional text."#
    )
}

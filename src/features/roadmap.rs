use serde_json::Value;
use tracing::{error, info};

use crate::api::parsing::{choice_message, first_choice, js_string};
use crate::clients::LlmClient;
use crate::errors::RelayError;

/// Generate a roadmap document for `topic`.
///
/// Makes exactly one completion call and parses the first choice's content as JSON.
/// The parsed value is returned as-is; its shape is not checked.
pub async fn generate_roadmap(client: &LlmClient, topic: &str) -> Result<Value, RelayError> {
    let prompt = client.build_prompt(topic);

    info!("Making request to OpenAI API...");
    let response = client.complete(prompt).await?;

    let Some(choice) = first_choice(&response) else {
        error!(response = %response, "No choices in response");
        return Err(RelayError::EmptyCompletion);
    };

    let Some(message) = choice_message(choice) else {
        error!(choice = %choice, "Completion choice has no message");
        return Err(RelayError::UpstreamError(
            "Completion choice has no message".to_string(),
        ));
    };

    // Non-string content is parsed from its loose string form: `null` parses to null,
    // a missing field becomes `undefined` and fails.
    let content = js_string(message.get("content"));

    match serde_json::from_str::<Value>(&content) {
        Ok(parsed) => {
            info!("Successfully parsed JSON response");
            Ok(parsed)
        }
        Err(e) => {
            error!(error = %e, "Error parsing JSON");
            error!(raw_content = %content, "Raw content");
            Err(RelayError::from(e))
        }
    }
}

use super::types::SummarizerOutput;
use super::ReconcileError;

/// Parse the summarizer's raw text reply into its resume object.
/// Accepts bare JSON or JSON wrapped in a Markdown code fence.
pub fn parse_summarizer_response(response: &str) -> Result<SummarizerOutput, ReconcileError> {
    let json_str = extract_json(response)?;

    let value: serde_json::Value =
        serde_json::from_str(json_str).map_err(|e| ReconcileError::JsonParsing(e.to_string()))?;

    if !value.is_object() {
        return Err(ReconcileError::MalformedResponse(
            "Top-level JSON is not an object".into(),
        ));
    }

    Ok(SummarizerOutput::from_value(value))
}

/// Like [`parse_summarizer_response`], but an unreadable reply is an
/// empty summary instead of an error.
pub fn parse_summarizer_response_lenient(response: &str) -> SummarizerOutput {
    parse_summarizer_response(response).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring unreadable summarizer output");
        SummarizerOutput::default()
    })
}

/// Locate the JSON object in the reply: a ```json fence, a bare ``` fence,
/// or the outermost braces.
fn extract_json(response: &str) -> Result<&str, ReconcileError> {
    if let Some(fenced) = fenced_block(response, "```json").or_else(|| fenced_block(response, "```")) {
        return Ok(fenced);
    }

    let start = response
        .find('{')
        .ok_or_else(|| ReconcileError::MalformedResponse("No JSON object found".into()))?;
    let end = response
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| ReconcileError::MalformedResponse("Unclosed JSON object".into()))?;

    Ok(&response[start..=end])
}

fn fenced_block<'a>(response: &'a str, opening: &str) -> Option<&'a str> {
    let content_start = response.find(opening)? + opening.len();
    let content_len = response[content_start..].find("```")?;
    Some(response[content_start..content_start + content_len].trim())
}

use serde::Serialize;

use super::build_assistant;
use crate::output;
use crate::SourceArgs;

pub fn run(
    query: &str,
    source: &SourceArgs,
    output_format: &str,
) -> Result<(), jiva_core::error::JivaError> {
    let assistant = build_assistant(source)?;

    match output_format {
        "json" => {
            let answered = assistant.respond_structured(query);
            let response = ChatResponse {
                response: answered.text,
                summary: answered.summary,
            };
            output::json::print(&response)?;
        }
        _ => println!("{}", assistant.respond(query)),
    }

    Ok(())
}

#[derive(Serialize)]
struct ChatResponse {
    response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<jiva_core::aggregate::UnitSummary>,
}

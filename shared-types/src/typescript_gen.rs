use ts_rs::TS;

/// Every wire type the front end consumes, in declaration order.
pub const API_TYPE_NAMES: &[&str] = &[
    "QaRecord",
    "MatchResult",
    "MatchRequest",
    "MatchResponse",
    "QuestionsQuery",
    "QuestionsResponse",
    "ExecuteRequest",
    "ExecutionKind",
    "ExecutionResult",
    "ErrorResponse",
    "HealthResponse",
    "VersionResponse",
];

pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let mut definitions = Vec::new();

    for name in type_names {
        let type_def = export_type(name)?;
        let cleaned = clean_type(type_def);

        if !cleaned.trim().is_empty() {
            definitions.push(cleaned);
        }
    }

    Ok(definitions.join("\n\n"))
}

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;

    let result = match name {
        "QaRecord" => QaRecord::export_to_string()?,
        "MatchResult" => MatchResult::export_to_string()?,
        "MatchRequest" => MatchRequest::export_to_string()?,
        "MatchResponse" => MatchResponse::export_to_string()?,
        "QuestionsQuery" => QuestionsQuery::export_to_string()?,
        "QuestionsResponse" => QuestionsResponse::export_to_string()?,

        "ExecuteRequest" => ExecuteRequest::export_to_string()?,
        "ExecutionKind" => ExecutionKind::export_to_string()?,
        "ExecutionResult" => ExecutionResult::export_to_string()?,

        "ErrorResponse" => ErrorResponse::export_to_string()?,
        "HealthResponse" => HealthResponse::export_to_string()?,
        "VersionResponse" => VersionResponse::export_to_string()?,

        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types can be found in shared-types/src/",
                name
            )
            .into());
        }
    };

    Ok(result)
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
        })
        .collect();

    filtered.join("\n").trim().to_string()
}

// Tauri command surface for TermGuide.
//
// Thin wrappers over guide_core. Every handler returns plain JSON; the
// webview page owns the query text and the current result set.

use serde_json::json;

use crate::structured_log::{log_event, LogLevel};

// =============================================================================
// SEARCH COMMANDS
// =============================================================================

/// Search the built-in catalog for commands matching the query
#[tauri::command]
pub async fn search_commands(query: String) -> Result<serde_json::Value, String> {
    let results = guide_core::search(&query, guide_core::catalog());

    log_event(
        LogLevel::Info,
        "MATCHER",
        "search",
        json!({ "query": query, "total": results.len() }),
    );

    Ok(json!({
        "results": results,
        "total": results.len(),
        "query": query,
    }))
}

/// Fixed example queries for the query field
#[tauri::command]
pub async fn get_suggestions() -> Result<serde_json::Value, String> {
    Ok(json!({ "suggestions": guide_core::default_suggestions() }))
}

/// Static capabilities overview shown when nothing matches
#[tauri::command]
pub async fn get_capabilities() -> Result<serde_json::Value, String> {
    Ok(json!({ "categories": guide_core::overview() }))
}

/// Placeholder names embedded in a command string
#[tauri::command]
pub async fn command_placeholders(command: String) -> Result<serde_json::Value, String> {
    let names = guide_core::placeholders(&command);

    Ok(json!({ "placeholders": names }))
}

// =============================================================================
// CLIPBOARD COMMANDS
// =============================================================================

/// Copy a command string verbatim to the system clipboard
#[tauri::command]
pub async fn copy_command(
    app_handle: tauri::AppHandle,
    command: String,
) -> Result<serde_json::Value, String> {
    use tauri::ClipboardManager;

    app_handle
        .clipboard_manager()
        .write_text(command.clone())
        .map_err(|e| e.to_string())?;

    log_event(
        LogLevel::Info,
        "CLIPBOARD",
        "copy",
        json!({ "command": command }),
    );

    Ok(json!({ "success": true }))
}

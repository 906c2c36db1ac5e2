//! Error handling utilities for MCP server

use rmcp::ErrorData;
use tally_core::TrackerError;

/// Helper to convert tracker errors to MCP errors
///
/// Validation failures map to invalid-params so clients can tell a bad
/// request apart from a server-side failure; everything else is internal.
pub fn to_mcp_error(message: &str, error: &TrackerError) -> ErrorData {
    match error {
        TrackerError::InvalidInput { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}

//! Services command handler.
//!
//! Prints the category table the classifier chooses from.

use std::fmt::Write as _;

use anyhow::Result;
use svcfind_core::PromptManager;

/// Execute the services command.
pub fn execute() -> Result<()> {
    print!("{}", describe(&PromptManager::new()));
    Ok(())
}

/// Render the registry and prompt statistics as a table.
pub fn describe(prompts: &PromptManager) -> String {
    let stats = prompts.prompt_stats();
    let mut out = String::new();

    let _ = writeln!(out, "{:<4} Service", "ID");
    let _ = writeln!(out, "{}", "-".repeat(60));
    for service in prompts.service_definitions() {
        let marker = if service.id == stats.fallback_service_id {
            " (fallback)"
        } else {
            ""
        };
        let _ = writeln!(out, "{:<4} {}{marker}", service.id, service.name);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Total services:       {}", stats.total_services);
    let _ = writeln!(
        out,
        "Fallback service:     {} ({})",
        stats.fallback_service_id, stats.fallback_service_name
    );
    let _ = writeln!(out, "System prompt length: {}", stats.system_prompt_length);
    out
}

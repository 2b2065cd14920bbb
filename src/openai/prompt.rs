//! Fixed system instruction for the recommendation exchange.

use std::fmt::Write;

use crate::domain::catalog::CATALOG;

/// Builds the system instruction: the user challenge, the numbered
/// department catalog with capability summaries, and the formatting rules
/// ending in the fixed call-to-action sentence.
pub fn system_instruction(user_text: &str) -> String {
    let mut instruction = format!(
        "You are an AI assistant for a PR & Communications toolkit with {} specialized departments and 70+ AI tools.\n\n\
         User Challenge: \"{}\"\n\n\
         Available Departments:\n",
        CATALOG.len(),
        user_text
    );

    for (index, department) in CATALOG.iter().enumerate() {
        let _ = writeln!(instruction, "{}. {} - {}", index + 1, department.name, department.blurb);
    }

    instruction.push_str(
        "\nInstructions:\n\
         - If the user's challenge matches 1-3 departments, recommend those specific departments with brief explanations\n\
         - If no perfect match exists, provide a strategic approach using multiple departments\n\
         - Keep responses concise (2-3 sentences per recommendation)\n\
         - Focus on actionable advice\n\
         - End with \"Click the department links below to access the specific AI tools!\"\n\n\
         Format your response as natural conversation, not a list.",
    );

    instruction
}

//! Textual plan parser.

use crate::types::ActionStep;

/// Convert raw planner output into an ordered sequence of action steps.
///
/// One action per meaningful line, `(action-name arg1 arg2 ...)`. Per line:
/// strip all parenthesis characters and split on whitespace; drop the line
/// when fewer than three tokens remain or the first token begins with `;`
/// (a comment). The first surviving token is the action name, the rest, in
/// order, its arguments.
///
/// There is no error path: malformed lines are silently dropped. Empty or
/// all-comment input yields an empty sequence.
pub fn parse_plan(raw: &str) -> Vec<ActionStep> {
    let mut steps = Vec::new();
    for line in raw.lines() {
        let stripped: String = line.chars().filter(|c| *c != '(' && *c != ')').collect();
        let tokens: Vec<&str> = stripped.split_whitespace().collect();
        if tokens.len() < 3 || tokens[0].starts_with(';') {
            continue;
        }
        let args = tokens[1..].iter().map(|t| t.to_string()).collect();
        steps.push(ActionStep::new(tokens[0], args));
    }
    steps
}

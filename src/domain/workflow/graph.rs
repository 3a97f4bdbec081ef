//! Mermaid rendering of the workflow state machine

use super::stage::Stage;

/// Render the state machine as a Mermaid flowchart
pub fn mermaid() -> String {
    let mut lines = vec!["flowchart TD".to_string()];

    lines.push(format!("    __start__([start]) --> {}", Stage::Classify));

    for stage in Stage::ALL {
        for (next, label) in stage.transitions() {
            if label.is_empty() {
                lines.push(format!("    {} --> {}", stage, next));
            } else {
                lines.push(format!("    {} -- {} --> {}", stage, label, next));
            }
        }
    }

    for stage in Stage::ALL.iter().filter(|s| s.is_terminal()) {
        lines.push(format!("    {} --> __end__([end])", stage));
    }

    lines.join("\n")
}

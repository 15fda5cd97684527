//! Graphviz rendering of the door state diagram.

use crate::core::{transitions, DoorState};

/// Generate a DOT graph of the transition table.
///
/// Nodes follow [`DoorState::ALL`] order and edges follow the table. Edges
/// that carry a side effect are labelled `operation / effect`. When
/// `current` is given that node is highlighted.
///
/// # Example
///
/// ```rust
/// use doorstate::{render_dot, DoorState};
///
/// let dot = render_dot(None);
/// assert!(dot.starts_with("digraph door {"));
/// assert!(dot.contains("Closed -> Open [label=\"open / visitors+1\"];"));
///
/// let highlighted = render_dot(Some(DoorState::Open));
/// assert!(highlighted.contains("peripheries=2"));
/// ```
pub fn render_dot(current: Option<DoorState>) -> String {
    let mut dot = String::from("digraph door {\n");
    dot.push_str("  rankdir=LR;\n");
    dot.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

    for state in DoorState::ALL {
        if current == Some(state) {
            dot.push_str(&format!(
                "  {state} [label=\"{state}\", fillcolor=palegreen, peripheries=2];\n"
            ));
        } else {
            dot.push_str(&format!("  {state} [label=\"{state}\"];\n"));
        }
    }

    for transition in transitions() {
        let label = match transition.effect {
            Some(effect) => format!("{} / {}", transition.operation, effect.label()),
            None => transition.operation.to_string(),
        };
        dot.push_str(&format!(
            "  {} -> {} [label=\"{label}\"];\n",
            transition.from, transition.to
        ));
    }

    dot.push_str("}\n");
    dot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_state_once() {
        let dot = render_dot(None);
        for state in DoorState::ALL {
            let node = format!("  {state} [label=");
            assert_eq!(dot.matches(&node).count(), 1, "missing node {state}");
        }
    }

    #[test]
    fn renders_one_edge_per_transition() {
        let dot = render_dot(None);
        assert_eq!(dot.matches(" -> ").count(), transitions().count());
        assert!(dot.contains("  Open -> Closed [label=\"close\"];\n"));
        assert!(dot.contains("  Closed -> Open [label=\"open / visitors+1\"];\n"));
        assert!(dot.contains("  Closed -> Locked [label=\"lock / locks+1\"];\n"));
        assert!(dot.contains("  Locked -> Closed [label=\"unlock\"];\n"));
    }

    #[test]
    fn highlights_only_the_current_state() {
        let dot = render_dot(Some(DoorState::Closed));
        assert_eq!(dot.matches("peripheries=2").count(), 1);
        assert!(dot.contains("  Closed [label=\"Closed\", fillcolor=palegreen, peripheries=2];\n"));

        assert!(!render_dot(None).contains("peripheries=2"));
    }

    #[test]
    fn graph_is_closed() {
        let dot = render_dot(None);
        assert!(dot.starts_with("digraph door {\n"));
        assert!(dot.ends_with("}\n"));
    }
}

//! Graphviz DOT export of a network.
//!
//! Produces a layered layout description: junctions grouped by board rank,
//! `Source` and `Ground` each in a rank of their own, edges labeled with
//! their exact resistance. Read-only projection for an external renderer.

use std::fmt::Write;

use bc_core::NodeId;

use crate::graph::Network;

/// Render the network as DOT text for a board of the given size.
pub fn render(net: &Network, size: usize) -> String {
    let mut out = String::from("graph birdcage {\n");
    if net.contains_node(NodeId::Source) {
        out.push_str("  { rank=same; \"Q\"; }\n");
    }
    for rank in (1..size).rev() {
        let row = 2 * rank as u8;
        let members: Vec<String> = net
            .nodes()
            .filter(|n| matches!(n, NodeId::Junction { row: r, .. } if *r == row))
            .map(|n| format!("\"{n}\""))
            .collect();
        if !members.is_empty() {
            let _ = writeln!(out, "  {{ rank=same; {}; }}", members.join("; "));
        }
    }
    if net.contains_node(NodeId::Ground) {
        out.push_str("  { rank=same; \"0\"; }\n");
    }
    for (u, v, r) in net.edges() {
        let _ = writeln!(out, "  \"{u}\" -- \"{v}\" [label=\"{r}\"];");
    }
    out.push_str("}\n");
    out
}

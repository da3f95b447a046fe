//! Graph emission for external visualizers.

use std::collections::BTreeMap;

use crate::core::{
    bdd_manager::DDManager,
    bdd_node::{DDNode, NodeID, VarID},
};

impl DDManager {
    /// Generate graphviz for the provided function, not including any
    /// graph nodes not part of the function. Nodes of one variable are
    /// ranked together; low edges are dotted.
    pub fn graphviz(&self, f: NodeID) -> String {
        let nodes = self.find_nodes(f);

        let mut by_var: BTreeMap<VarID, Vec<DDNode>> = BTreeMap::new();
        for &id in nodes.iter() {
            let node = self.node(id);
            if !node.is_constant() {
                by_var.entry(node.var).or_default().push(*node);
            }
        }

        let mut graph = String::new();
        graph += "digraph BDD {\n";
        graph += "\"0\" [shape = \"box\"];\n";
        graph += "\"1\" [shape = \"box\"];\n";

        let mut edges = String::new();
        for (var, group) in by_var {
            graph += format!("subgraph cluster_{} {{\nrank=same;\n", var.0).as_str();
            for node in group {
                graph += format!(
                    "\"{}\" [label=\"{}\\n{}\"]\n",
                    node.id.0,
                    self.var_label(var).unwrap_or("?"),
                    node.id.0
                )
                .as_str();
                edges += format!(
                    "\"{}\" -> \"{}\" [style = \"dotted\"]\n",
                    node.id.0, node.low.0
                )
                .as_str();
                edges += format!("\"{}\" -> \"{}\"\n", node.id.0, node.high.0).as_str();
            }
            graph += "}\n\n";
        }

        graph += edges.as_str();
        graph += "}\n";
        graph
    }

    /// Plain-text listing of the nodes reachable from `f`, one line per
    /// node, highest id first: id, top variable and children for
    /// internal nodes, the constant's value otherwise.
    pub fn dump_text(&self, f: NodeID) -> String {
        let mut out = String::new();
        for &id in self.find_nodes(f).iter().rev() {
            let node = self.node(id);
            if node.is_constant() {
                out += format!("Terminal Node: {}\n", self.node_label(id)).as_str();
            } else {
                out += format!(
                    "Variable Node: {} Top Var Id: {} Top Var Name: {} Low: {} High: {}\n",
                    node.id.0,
                    node.var.0,
                    self.var_label(node.var).unwrap_or("?"),
                    node.low.0,
                    node.high.0
                )
                .as_str();
            }
        }
        out
    }
}

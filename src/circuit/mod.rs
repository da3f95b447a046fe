//! Mapping topologically sorted gate-level circuits onto the BDD
//! kernel, the contract used by the benchmark front end.

use std::{
    collections::BTreeSet,
    fmt, fs, io,
    path::Path,
};

use itertools::Itertools;
use log::info;

use crate::{
    core::{bdd_manager::DDManager, bdd_node::NodeID},
    misc::hash_select::HashMap,
};

/// Gate kinds understood by the driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Gate {
    Input,
    Not,
    And,
    Or,
    Nand,
    Nor,
    Xor,
    Buffer,
    Output,
    FlipFlop,
}

/// One entry of a topologically sorted circuit. `inputs` holds the ids
/// of circuit nodes appearing earlier in the order.
#[derive(Debug, Clone)]
pub struct CircuitNode {
    pub id: u64,
    pub label: String,
    pub gate: Gate,
    pub inputs: BTreeSet<u64>,
}

#[derive(Debug)]
pub enum CircuitError {
    /// A gate references a circuit node id that has not been mapped yet.
    MissingInput(u64),
    /// A gate has the wrong number of inputs for its kind.
    MalformedGate(u64),
    /// An output label was requested that the circuit never produced.
    UnknownOutput(String),
    Io(io::Error),
    Csv(csv::Error),
}

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CircuitError::MissingInput(id) => {
                write!(f, "Circuit node {} is not part of the circuit graph.", id)
            }
            CircuitError::MalformedGate(id) => {
                write!(f, "Gate {} has the wrong number of inputs.", id)
            }
            CircuitError::UnknownOutput(label) => {
                write!(f, "Output label {:?} was never mapped.", label)
            }
            CircuitError::Io(e) => write!(f, "I/O error: {}", e),
            CircuitError::Csv(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl From<io::Error> for CircuitError {
    fn from(e: io::Error) -> Self {
        CircuitError::Io(e)
    }
}

impl From<csv::Error> for CircuitError {
    fn from(e: csv::Error) -> Self {
        CircuitError::Csv(e)
    }
}

/// Maps circuit node ids and labels to BDD ids.
#[derive(Debug, Default)]
pub struct CircuitToBdd {
    node_to_bdd: HashMap<u64, NodeID>,
    label_to_bdd: HashMap<String, NodeID>,
}

impl CircuitToBdd {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the BDD of every gate in the topologically sorted
    /// `circuit`. INPUT gates create variables; OUTPUT and FLIP_FLOP
    /// gates create no nodes and record the BDD of their single input.
    pub fn generate(
        &mut self,
        man: &mut DDManager,
        circuit: &[CircuitNode],
    ) -> Result<(), CircuitError> {
        for node in circuit {
            let bdd = match node.gate {
                Gate::Input => man.create_var(&node.label),
                Gate::Not => {
                    let f = self.single_input(node)?;
                    man.neg(f)
                }
                Gate::And => self.fold(man, node, DDManager::and)?,
                Gate::Or => self.fold(man, node, DDManager::or)?,
                Gate::Xor => self.fold(man, node, DDManager::xor)?,
                Gate::Nand => {
                    let f = self.fold(man, node, DDManager::and)?;
                    man.neg(f)
                }
                Gate::Nor => {
                    let f = self.fold(man, node, DDManager::or)?;
                    man.neg(f)
                }
                Gate::Buffer | Gate::Output | Gate::FlipFlop => self.single_input(node)?,
            };

            self.node_to_bdd.insert(node.id, bdd);
            self.label_to_bdd.insert(node.label.clone(), bdd);
        }

        info!(
            "mapped {} circuit nodes onto {} BDD nodes",
            circuit.len(),
            man.unique_table_size()
        );
        Ok(())
    }

    /// BDD id previously computed for a circuit node.
    pub fn bdd_id(&self, circuit_id: u64) -> Result<NodeID, CircuitError> {
        self.node_to_bdd
            .get(&circuit_id)
            .copied()
            .ok_or(CircuitError::MissingInput(circuit_id))
    }

    /// BDD id previously computed for a circuit label.
    pub fn bdd_id_of_label(&self, label: &str) -> Result<NodeID, CircuitError> {
        self.label_to_bdd
            .get(label)
            .copied()
            .ok_or_else(|| CircuitError::UnknownOutput(label.to_string()))
    }

    /// Stream the `(BDD id, label)` mapping as CSV, sorted by label.
    pub fn write_mapping<W: io::Write>(&self, out: W) -> Result<(), CircuitError> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(["BDD_ID", "Bench Label"])?;
        for (label, id) in self.label_to_bdd.iter().sorted() {
            writer.write_record([id.0.to_string(), label.clone()])?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write one DOT file per requested output label into `dir`.
    pub fn export_outputs(
        &self,
        man: &DDManager,
        dir: &Path,
        outputs: &BTreeSet<String>,
    ) -> Result<(), CircuitError> {
        fs::create_dir_all(dir)?;
        for label in outputs {
            let root = self.bdd_id_of_label(label)?;
            fs::write(dir.join(format!("{}.dot", label)), man.graphviz(root))?;
        }
        Ok(())
    }

    /// Left fold of a binary operator over all gate inputs.
    fn fold(
        &self,
        man: &mut DDManager,
        node: &CircuitNode,
        op: fn(&mut DDManager, NodeID, NodeID) -> NodeID,
    ) -> Result<NodeID, CircuitError> {
        let mut ids = node.inputs.iter();
        let first = *ids.next().ok_or(CircuitError::MalformedGate(node.id))?;

        let mut acc = self.bdd_id(first)?;
        for &next in ids {
            let rhs = self.bdd_id(next)?;
            acc = op(man, acc, rhs);
        }
        Ok(acc)
    }

    fn single_input(&self, node: &CircuitNode) -> Result<NodeID, CircuitError> {
        let &id = node
            .inputs
            .iter()
            .exactly_one()
            .map_err(|_| CircuitError::MalformedGate(node.id))?;
        self.bdd_id(id)
    }
}

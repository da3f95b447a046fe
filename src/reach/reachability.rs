use bitvec::prelude::*;
use log::debug;

use crate::core::{
    bdd_manager::DDManager,
    bdd_node::{NodeID, ONE},
};

use super::ReachError;

/// Symbolic finite-state machine: current-state, next-state and input
/// variables in one owned kernel, a transition relation and the
/// characteristic function of the initial set.
///
/// Setters may be called at any time; every query recomputes its fixed
/// point from the initial set, so a setter simply invalidates whatever
/// a previous query had converged on.
#[derive(Debug)]
pub struct Reachability {
    man: DDManager,
    states: Vec<NodeID>,
    next_states: Vec<NodeID>,
    inputs: Vec<NodeID>,
    init_state: BitVec,
    transition_functions: Vec<NodeID>,
    /// Relational identity between current and next states,
    /// fixed for the lifetime of the machine
    identity: NodeID,
    /// Transition relation over states, next states and inputs
    tau: NodeID,
    /// Characteristic function of the initial set
    cs0: NodeID,
}

impl Reachability {
    /// Create a machine with `state_size` state bits and `input_size`
    /// input bits. The default transition function of every bit is the
    /// identity and the default initial state is all-false, so a fresh
    /// machine reaches exactly the all-false state.
    pub fn new(state_size: usize, input_size: usize) -> Result<Self, ReachError> {
        if state_size == 0 {
            return Err(ReachError::EmptyStateSpace);
        }

        let mut man = DDManager::default();

        let mut states = Vec::with_capacity(state_size);
        let mut next_states = Vec::with_capacity(state_size);
        for i in 0..state_size {
            states.push(man.create_var(&format!("s{}", i)));
            next_states.push(man.create_var(&format!("s{}'", i)));
        }

        let inputs = (0..input_size)
            .map(|j| man.create_var(&format!("i{}", j)))
            .collect();

        let identity = Self::pairwise_xnor(&mut man, &states, &next_states);

        let init_state = bitvec![0; state_size];
        let cs0 = Self::characteristic(&mut man, &states, &init_state);
        let transition_functions = states.clone();
        let tau = Self::pairwise_xnor(&mut man, &next_states, &transition_functions);

        Ok(Reachability {
            man,
            states,
            next_states,
            inputs,
            init_state,
            transition_functions,
            identity,
            tau,
            cs0,
        })
    }

    /// Current-state variables, in bit order.
    pub fn states(&self) -> &[NodeID] {
        &self.states
    }

    /// Input variables, in bit order.
    pub fn inputs(&self) -> &[NodeID] {
        &self.inputs
    }

    /// The configured initial state.
    pub fn init_state(&self) -> &BitSlice {
        &self.init_state
    }

    pub fn manager(&self) -> &DDManager {
        &self.man
    }

    /// The shared kernel, for building transition functions against.
    pub fn manager_mut(&mut self) -> &mut DDManager {
        &mut self.man
    }

    /// Replace the transition functions, one per state bit, and rebuild
    /// the transition relation.
    pub fn set_transition_functions(
        &mut self,
        transition_functions: &[NodeID],
    ) -> Result<(), ReachError> {
        if transition_functions.len() != self.states.len() {
            return Err(ReachError::ArityMismatch {
                expected: self.states.len(),
                got: transition_functions.len(),
            });
        }

        for &tf in transition_functions {
            if self.man.get_node(tf).is_none() {
                return Err(ReachError::UnknownId(tf));
            }
        }

        self.transition_functions = transition_functions.to_vec();
        self.tau = Self::pairwise_xnor(&mut self.man, &self.next_states, &self.transition_functions);
        Ok(())
    }

    /// Replace the initial state and rebuild its characteristic
    /// function.
    pub fn set_init_state(&mut self, state_vector: &BitSlice) -> Result<(), ReachError> {
        self.check_width(state_vector)?;

        self.init_state = state_vector.to_bitvec();
        self.cs0 = Self::characteristic(&mut self.man, &self.states, state_vector);
        Ok(())
    }

    /// Whether `state_vector` is reachable from the initial set.
    pub fn is_reachable(&mut self, state_vector: &BitSlice) -> Result<bool, ReachError> {
        self.check_width(state_vector)?;

        let reached = self.reachable_states();
        Ok(self.contains(reached, state_vector))
    }

    /// Minimum number of transitions from the initial set to
    /// `state_vector`, or -1 if the state is unreachable. The initial
    /// states themselves are at distance 0.
    pub fn state_distance(&mut self, state_vector: &BitSlice) -> Result<i32, ReachError> {
        self.check_width(state_vector)?;

        let mut cr = self.cs0;
        let mut distance = 0;
        loop {
            if self.contains(cr, state_vector) {
                return Ok(distance);
            }

            let img = self.image(cr);
            let next = self.man.or(cr, img);
            if next == cr {
                // closed under the image without hitting the state
                return Ok(-1);
            }

            cr = next;
            distance += 1;
        }
    }

    /// Smallest fixed point of `cr = cs0 or image(cr)`.
    fn reachable_states(&mut self) -> NodeID {
        let mut cr = self.cs0;
        let mut rounds = 0usize;
        loop {
            let img = self.image(cr);
            let next = self.man.or(cr, img);
            if next == cr {
                debug!(
                    "reachability fixed point after {} image rounds, {} nodes total",
                    rounds,
                    self.man.unique_table_size()
                );
                return cr;
            }
            cr = next;
            rounds += 1;
        }
    }

    /// One-step image of the state set `cr` under the transition
    /// relation, renamed back into current-state variables.
    fn image(&mut self, cr: NodeID) -> NodeID {
        // img'(s') = exists s. exists i. (cr and tau)
        let step = self.man.and(cr, self.tau);
        let step = self.man.exists(step, &self.states);
        let img_next = self.man.exists(step, &self.inputs);

        // img(s) = exists s'. exists i. (identity and img')
        let renamed = self.man.and(self.identity, img_next);
        let renamed = self.man.exists(renamed, &self.next_states);
        self.man.exists(renamed, &self.inputs)
    }

    /// Whether the single state `state_vector` lies in the set `cr`.
    fn contains(&mut self, cr: NodeID, state_vector: &BitSlice) -> bool {
        self.man.restrict(cr, &self.states, state_vector) == ONE.id
    }

    fn check_width(&self, state_vector: &BitSlice) -> Result<(), ReachError> {
        if state_vector.len() != self.states.len() {
            return Err(ReachError::ArityMismatch {
                expected: self.states.len(),
                got: state_vector.len(),
            });
        }
        Ok(())
    }

    /// Conjunction of the pairwise XNORs of two variable vectors.
    fn pairwise_xnor(man: &mut DDManager, a: &[NodeID], b: &[NodeID]) -> NodeID {
        let mut acc = ONE.id;
        for (&x, &y) in a.iter().zip(b.iter()) {
            let eq = man.xnor(x, y);
            acc = man.and(acc, eq);
        }
        acc
    }

    /// Characteristic function of a single state: the conjunction of
    /// one literal per bit (XNOR with a constant collapses to the
    /// literal).
    fn characteristic(man: &mut DDManager, vars: &[NodeID], bits: &BitSlice) -> NodeID {
        let mut acc = ONE.id;
        for (&s, bit) in vars.iter().zip(bits.iter().by_vals()) {
            let literal = if bit { s } else { man.neg(s) };
            acc = man.and(acc, literal);
        }
        acc
    }
}

#[cfg(test)]
pub mod tests {
    use bitvec::prelude::*;

    use crate::{
        core::bdd_node::NodeID,
        reach::{ReachError, Reachability},
    };

    #[test]
    fn zero_state_bits_is_rejected() {
        assert_eq!(
            Reachability::new(0, 0).unwrap_err(),
            ReachError::EmptyStateSpace
        );
        assert_eq!(
            Reachability::new(0, 3).unwrap_err(),
            ReachError::EmptyStateSpace
        );
    }

    #[test]
    fn default_machine_reaches_only_the_initial_state() {
        let mut fsm = Reachability::new(1, 0).unwrap();

        assert!(fsm.is_reachable(bits![0]).unwrap());
        assert!(!fsm.is_reachable(bits![1]).unwrap());
    }

    #[test]
    fn identity_transitions_keep_the_initial_state_fixed() {
        let mut fsm = Reachability::new(2, 3).unwrap();

        assert!(fsm.is_reachable(bits![0, 0]).unwrap());
        assert!(!fsm.is_reachable(bits![1, 0]).unwrap());
        assert!(!fsm.is_reachable(bits![0, 1]).unwrap());
        assert!(!fsm.is_reachable(bits![1, 1]).unwrap());

        assert_eq!(fsm.state_distance(bits![0, 0]).unwrap(), 0);
        assert_eq!(fsm.state_distance(bits![1, 1]).unwrap(), -1);
    }

    #[test]
    fn toggle_fsm() {
        let mut fsm = Reachability::new(2, 0).unwrap();
        let s0 = fsm.states()[0];
        let s1 = fsm.states()[1];

        let man = fsm.manager_mut();
        let ns0 = man.neg(s0);
        let ns1 = man.neg(s1);

        fsm.set_transition_functions(&[ns0, ns1]).unwrap();
        fsm.set_init_state(bits![0, 0]).unwrap();

        assert!(fsm.is_reachable(bits![0, 0]).unwrap());
        assert!(!fsm.is_reachable(bits![0, 1]).unwrap());
        assert!(!fsm.is_reachable(bits![1, 0]).unwrap());
        assert!(fsm.is_reachable(bits![1, 1]).unwrap());
    }

    #[test]
    fn counter_distances() {
        let mut fsm = Reachability::new(2, 0).unwrap();
        let s0 = fsm.states()[0];
        let s1 = fsm.states()[1];

        let man = fsm.manager_mut();
        let ns0 = man.neg(s0);
        let s0_xor_s1 = man.xor(s0, s1);

        fsm.set_transition_functions(&[ns0, s0_xor_s1]).unwrap();
        fsm.set_init_state(bits![0, 0]).unwrap();

        assert_eq!(fsm.state_distance(bits![0, 0]).unwrap(), 0);
        assert_eq!(fsm.state_distance(bits![1, 0]).unwrap(), 1);
        assert_eq!(fsm.state_distance(bits![0, 1]).unwrap(), 2);
        assert_eq!(fsm.state_distance(bits![1, 1]).unwrap(), 3);
    }

    #[test]
    fn gated_counter_with_input() {
        let mut fsm = Reachability::new(2, 1).unwrap();
        let s0 = fsm.states()[0];
        let s1 = fsm.states()[1];
        let i0 = fsm.inputs()[0];

        // Counter up to 2 that only advances while i0 is held:
        // 00, 10, 01 and reset to 00
        let man = fsm.manager_mut();
        let zero = man.zero();
        let ns0 = man.neg(s0);
        let advance = man.ite(s1, zero, ns0);
        let t0 = man.and(i0, advance);
        let ns1 = man.neg(s1);
        let s0_and_ns1 = man.and(s0, ns1);
        let t1 = man.and(i0, s0_and_ns1);

        fsm.set_transition_functions(&[t0, t1]).unwrap();
        fsm.set_init_state(bits![0, 0]).unwrap();

        assert!(fsm.is_reachable(bits![0, 0]).unwrap());
        assert!(fsm.is_reachable(bits![1, 0]).unwrap());
        assert!(fsm.is_reachable(bits![0, 1]).unwrap());
        assert!(!fsm.is_reachable(bits![1, 1]).unwrap());

        assert_eq!(fsm.state_distance(bits![0, 0]).unwrap(), 0);
        assert_eq!(fsm.state_distance(bits![1, 0]).unwrap(), 1);
        assert_eq!(fsm.state_distance(bits![0, 1]).unwrap(), 2);
        assert_eq!(fsm.state_distance(bits![1, 1]).unwrap(), -1);
    }

    #[test]
    fn three_bit_counter_walks_all_states() {
        let mut fsm = Reachability::new(3, 0).unwrap();
        let s0 = fsm.states()[0];
        let s1 = fsm.states()[1];
        let s2 = fsm.states()[2];

        let man = fsm.manager_mut();
        let t0 = man.neg(s0);
        let t1 = man.xor(s0, s1);
        let s0_and_s1 = man.and(s0, s1);
        let t2 = man.xor(s0_and_s1, s2);

        fsm.set_transition_functions(&[t0, t1, t2]).unwrap();
        fsm.set_init_state(bits![0, 0, 0]).unwrap();

        assert_eq!(fsm.state_distance(bits![0, 0, 0]).unwrap(), 0);
        assert_eq!(fsm.state_distance(bits![1, 0, 0]).unwrap(), 1);
        assert_eq!(fsm.state_distance(bits![0, 1, 0]).unwrap(), 2);
        assert_eq!(fsm.state_distance(bits![1, 1, 0]).unwrap(), 3);
        assert_eq!(fsm.state_distance(bits![0, 0, 1]).unwrap(), 4);
        assert_eq!(fsm.state_distance(bits![1, 0, 1]).unwrap(), 5);
        assert_eq!(fsm.state_distance(bits![0, 1, 1]).unwrap(), 6);
        assert_eq!(fsm.state_distance(bits![1, 1, 1]).unwrap(), 7);
    }

    #[test]
    fn set_init_state_recomputes_the_closure() {
        let mut fsm = Reachability::new(2, 0).unwrap();
        let s0 = fsm.states()[0];
        let s1 = fsm.states()[1];

        let man = fsm.manager_mut();
        let ns0 = man.neg(s0);
        let s0_xor_s1 = man.xor(s0, s1);

        fsm.set_transition_functions(&[ns0, s0_xor_s1]).unwrap();
        fsm.set_init_state(bits![0, 0]).unwrap();
        assert_eq!(fsm.state_distance(bits![0, 1]).unwrap(), 2);

        // restart the counter one step into the cycle
        fsm.set_init_state(bits![1, 0]).unwrap();
        assert_eq!(fsm.init_state(), bits![1, 0]);
        assert_eq!(fsm.state_distance(bits![1, 0]).unwrap(), 0);
        assert_eq!(fsm.state_distance(bits![0, 1]).unwrap(), 1);
        assert_eq!(fsm.state_distance(bits![1, 1]).unwrap(), 2);
        assert_eq!(fsm.state_distance(bits![0, 0]).unwrap(), 3);
    }

    #[test]
    fn exception_surface() {
        let mut fsm = Reachability::new(2, 0).unwrap();
        let s0 = fsm.states()[0];
        let s1 = fsm.states()[1];

        let man = fsm.manager_mut();
        let ns0 = man.neg(s0);
        let s0_xor_s1 = man.xor(s0, s1);

        assert_eq!(
            fsm.set_transition_functions(&[ns0, ns0, s0_xor_s1])
                .unwrap_err(),
            ReachError::ArityMismatch {
                expected: 2,
                got: 3
            }
        );
        assert_eq!(
            fsm.set_init_state(bits![0, 0, 1]).unwrap_err(),
            ReachError::ArityMismatch {
                expected: 2,
                got: 3
            }
        );
        assert!(matches!(
            fsm.is_reachable(bits![1, 1, 1]).unwrap_err(),
            ReachError::ArityMismatch { .. }
        ));
        assert!(matches!(
            fsm.state_distance(bits![1, 1, 1]).unwrap_err(),
            ReachError::ArityMismatch { .. }
        ));
    }

    #[test]
    fn unknown_transition_ids_are_rejected() {
        let mut fsm = Reachability::new(1, 0).unwrap();
        let bogus = NodeID(4242);

        assert_eq!(
            fsm.set_transition_functions(&[bogus]).unwrap_err(),
            ReachError::UnknownId(bogus)
        );
    }

    #[test]
    fn variables_are_created_in_declaration_order() {
        let fsm = Reachability::new(2, 1).unwrap();

        // s0, s0', s1, s1', i0 after the two constants
        assert_eq!(fsm.states(), &[NodeID(2), NodeID(4)]);
        assert_eq!(fsm.inputs(), &[NodeID(6)]);
        assert_eq!(fsm.manager().var_count(), 5);
    }
}

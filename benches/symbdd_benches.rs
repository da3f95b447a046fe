use bitvec::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};

use symbdd::core::bdd_manager::DDManager;
use symbdd::reach::Reachability;

/// Build an XOR ladder over a fresh manager.
fn xor_chain(width: usize) -> DDManager {
    let mut man = DDManager::default();
    let mut f = man.zero();
    for i in 0..width {
        let v = man.create_var(&format!("x{}", i));
        f = man.xor(f, v);
    }
    man
}

/// Ripple-carry counter over `bits` state bits, driven to its last
/// state.
fn counter_distance(bits: usize) -> i32 {
    let mut fsm = Reachability::new(bits, 0).unwrap();
    let states = fsm.states().to_vec();

    let man = fsm.manager_mut();
    let mut transitions = Vec::with_capacity(bits);
    let mut carry = man.one();
    for &s in &states {
        transitions.push(man.xor(s, carry));
        carry = man.and(carry, s);
    }

    fsm.set_transition_functions(&transitions).unwrap();
    fsm.state_distance(&bitvec![1; bits]).unwrap()
}

fn bench_xor_chain(c: &mut Criterion) {
    c.bench_function("xor_chain_16", |b| b.iter(|| xor_chain(16)));
}

fn bench_counter_fixed_point(c: &mut Criterion) {
    c.bench_function("counter_5bit_distance", |b| {
        b.iter(|| {
            let d = counter_distance(5);
            assert_eq!(d, 31);
            d
        })
    });
}

criterion_group!(benches, bench_xor_chain, bench_counter_fixed_point);
criterion_main!(benches);

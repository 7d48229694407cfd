use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use powerset::Automaton;

// The language "the n-th symbol from the end is an a": n + 1 states, but its
// DFA needs 2^n.
fn nth_from_end(n: usize) -> Automaton<usize, char> {
    let mut builder = Automaton::builder();
    builder
        .states(0..=n)
        .alphabet(vec!['a', 'b'])
        .transitions(vec![(0, Some('a'), vec![0, 1]), (0, Some('b'), vec![0])])
        .initial(0)
        .accept(n);
    for state in 1..n {
        builder.transition(state, 'a', state + 1);
        builder.transition(state, 'b', state + 1);
    }
    builder.build().unwrap()
}

// A chain of epsilon edges looping back to the start, to stress the closure.
fn epsilon_ring(n: usize) -> Automaton<usize, char> {
    let mut builder = Automaton::builder();
    builder.states(0..n).alphabet(vec!['a']).initial(0).accept(n - 1);
    for state in 0..n {
        builder.epsilon(state, (state + 1) % n);
        builder.transition(state, 'a', state);
    }
    builder.build().unwrap()
}

fn powerset_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("powerset_construction");
    for &n in &[4, 8, 12] {
        let nfa = nth_from_end(n);
        group.bench_with_input(BenchmarkId::new("nth_from_end", n), &nfa, |b, nfa| {
            b.iter(|| nfa.powerset_construction())
        });
    }
    for &n in &[16, 64, 256] {
        let nfa = epsilon_ring(n);
        group.bench_with_input(BenchmarkId::new("epsilon_ring", n), &nfa, |b, nfa| {
            b.iter(|| nfa.powerset_construction())
        });
    }
    group.finish();
}

fn simulate(c: &mut Criterion) {
    let dfa = nth_from_end(8).powerset_construction();
    let haystack: String = "ab".repeat(5000);
    c.bench_function("simulate_10k", |b| {
        b.iter(|| dfa.simulate(black_box(haystack.chars())).unwrap())
    });
}

criterion_group!(benches, powerset_construction, simulate);
criterion_main!(benches);

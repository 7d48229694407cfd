use std::fmt::Debug;
use std::hash::Hash;

use powerset::{Automaton, MalformedAutomaton};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    report(&digits()?, &["", "0", "01", "10", "0010"]);
    report(&letters()?, &["", "a", "aa", "abb"]);
    report(&loops()?, &["", "b", "ba", "bba"]);
    Ok(())
}

fn digits() -> Result<Automaton<u32, char>, MalformedAutomaton<u32, char>> {
    Automaton::builder()
        .states(1..=4)
        .alphabet(vec!['0', '1'])
        .epsilon(1, 3)
        .epsilon(3, 2)
        .transition(1, '0', 2)
        .transitions(vec![(2, Some('1'), vec![2, 4])])
        .transition(3, '0', 4)
        .transition(4, '0', 3)
        .initial(1)
        .accepting(vec![3, 4])
        .build()
}

fn letters() -> Result<Automaton<&'static str, char>, MalformedAutomaton<&'static str, char>> {
    Automaton::builder()
        .states(vec!["q0", "q1", "q2", "q3"])
        .alphabet(vec!['a', 'b'])
        .epsilon("q0", "q1")
        .transitions(vec![
            ("q1", Some('a'), vec!["q1", "q2"]),
            ("q2", Some('a'), vec!["q0", "q2"]),
        ])
        .transition("q1", 'b', "q2")
        .transition("q2", 'b', "q3")
        .transition("q3", 'b', "q1")
        .initial("q0")
        .accept("q0")
        .build()
}

fn loops() -> Result<Automaton<&'static str, char>, MalformedAutomaton<&'static str, char>> {
    Automaton::builder()
        .states(vec!["q0", "q1", "q2"])
        .alphabet(vec!['a', 'b'])
        .epsilon("q0", "q2")
        .transition("q0", 'b', "q1")
        .transitions(vec![("q1", Some('a'), vec!["q1", "q2"])])
        .transition("q1", 'b', "q2")
        .transition("q2", 'a', "q0")
        .initial("q0")
        .accept("q0")
        .build()
}

fn report<S>(nfa: &Automaton<S, char>, words: &[&str])
where
    S: Clone + Eq + Hash + Debug,
{
    let dfa = nfa.powerset_construction();
    println!("{:#?}", dfa);
    for word in words {
        match dfa.simulate(word.chars()) {
            Ok(verdict) => println!("{:?} -> {:?}", word, verdict),
            Err(err) => println!("{:?} -> {}", word, err),
        }
    }
}

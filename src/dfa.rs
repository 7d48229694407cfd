use std::hash::Hash;

use log::trace;

use crate::automaton::{Automaton, StateRef};
use crate::error::SimulationError;
use crate::nfa::Subset;

/// Outcome of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict<S> {
    /// The run ended in an accepting state. The path starts at the initial
    /// state and has one more entry than the input has symbols.
    Accepted(Vec<S>),
    /// The run ended in a non-accepting state.
    Rejected,
}

impl<S> Verdict<S> {
    pub fn is_accepted(&self) -> bool {
        match self {
            Verdict::Accepted(_) => true,
            Verdict::Rejected => false,
        }
    }

    pub fn path(&self) -> Option<&[S]> {
        match self {
            Verdict::Accepted(path) => Some(path.as_slice()),
            Verdict::Rejected => None,
        }
    }
}

impl<S, A> Automaton<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    #[inline]
    fn next_state(&self, state: StateRef, symbol: &A) -> Option<StateRef> {
        let symbol = self.alphabet.get_index_of(symbol)?;
        self.transitions[state].get(&Some(symbol))?.iter().next()
    }

    /// Walks `input` through a deterministic automaton.
    ///
    /// A missing transition (including one on a symbol outside the alphabet)
    /// is an `UndefinedTransition` error, not a rejection. Nondeterministic
    /// automata are refused; use [`Automaton::check`] for those.
    pub fn simulate<I>(&self, input: I) -> Result<Verdict<S>, SimulationError<S, A>>
    where
        I: IntoIterator<Item = A>,
    {
        if !self.is_deterministic() {
            return Err(SimulationError::Nondeterministic);
        }

        let mut cur_state = self.initial;
        let mut path = vec![cur_state];
        for symbol in input {
            cur_state = match self.next_state(cur_state, &symbol) {
                Some(nxt_state) => nxt_state,
                None => {
                    return Err(SimulationError::UndefinedTransition {
                        state: self.states[cur_state].clone(),
                        symbol,
                    })
                }
            };
            path.push(cur_state);
        }
        trace!("Run path: {:?}", path);

        if self.finals[cur_state] {
            Ok(Verdict::Accepted(
                path.into_iter()
                    .map(|state| self.states[state].clone())
                    .collect(),
            ))
        } else {
            Ok(Verdict::Rejected)
        }
    }

    /// Simulates any automaton by determinizing it first; the path consists
    /// of composite states.
    ///
    /// Each call converts again, so callers running many inputs should keep
    /// the result of [`Automaton::powerset_construction`] and call
    /// [`Automaton::simulate`] on it.
    pub fn check<I>(&self, input: I) -> Result<Verdict<Subset<S>>, SimulationError<Subset<S>, A>>
    where
        I: IntoIterator<Item = A>,
    {
        self.powerset_construction().simulate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parity() -> Automaton<&'static str, char> {
        // even number of 'a's, 'b' only from even
        Automaton::builder()
            .states(vec!["even", "odd"])
            .alphabet(vec!['a', 'b'])
            .transition("even", 'a', "odd")
            .transition("odd", 'a', "even")
            .transition("even", 'b', "even")
            .initial("even")
            .accept("even")
            .build()
            .unwrap()
    }

    #[test]
    fn accepted_runs_report_the_path() {
        let verdict = parity().simulate("aab".chars()).unwrap();
        assert!(verdict.is_accepted());
        assert_eq!(verdict.path(), Some(&["even", "odd", "even", "even"][..]));
        assert_eq!(verdict, Verdict::Accepted(vec!["even", "odd", "even", "even"]));
    }

    #[test]
    fn no_move_mid_run_is_an_error() {
        // 'b' is only defined from "even"
        assert_eq!(
            parity().simulate("aba".chars()),
            Err(SimulationError::UndefinedTransition {
                state: "odd",
                symbol: 'b'
            })
        );
    }

    #[test]
    fn empty_input_visits_only_the_initial_state() {
        assert_eq!(
            parity().simulate("".chars()).unwrap(),
            Verdict::Accepted(vec!["even"])
        );
    }

    #[test]
    fn rejection_is_not_an_error() {
        let verdict = parity().simulate("a".chars()).unwrap();
        assert_eq!(verdict, Verdict::Rejected);
        assert_eq!(verdict.path(), None);
    }

    #[test]
    fn missing_edges_are_errors() {
        assert_eq!(
            parity().simulate("ab".chars()).unwrap_err(),
            SimulationError::UndefinedTransition {
                state: "odd",
                symbol: 'b'
            }
        );
        assert_eq!(
            parity().simulate("c".chars()).unwrap_err(),
            SimulationError::UndefinedTransition {
                state: "even",
                symbol: 'c'
            }
        );
    }

    #[test]
    fn refuses_nondeterministic_input() {
        let nfa = Automaton::builder()
            .states(vec![0, 1])
            .alphabet(vec!['a'])
            .epsilon(0, 1)
            .initial(0)
            .accept(1)
            .build()
            .unwrap();
        assert_eq!(
            nfa.simulate(vec!['a']).unwrap_err(),
            SimulationError::Nondeterministic
        );

        let verdict = nfa.check(vec![]).unwrap();
        let path = verdict.path().unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].iter().cloned().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn check_on_a_dfa_walks_singletons() {
        let verdict = parity().check("aa".chars()).unwrap();
        let path: Vec<Vec<&str>> = verdict
            .path()
            .unwrap()
            .iter()
            .map(|subset| subset.iter().cloned().collect())
            .collect();
        assert_eq!(path, vec![vec!["even"], vec!["odd"], vec!["even"]]);
    }
}

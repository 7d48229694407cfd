//! Epsilon closure and subset construction for finite automata.
//!
//! An [`Automaton`] holds either an NFA (epsilon edges, several targets per
//! symbol) or a DFA; [`Automaton::powerset_construction`] turns the former
//! into the latter, and [`Automaton::simulate`] runs a deterministic one.
//! [`Automaton::check`] runs any automaton, nondeterministic or not, by
//! simulating its determinized form; its path is made of composite states.
//!
//! ```
//! use powerset::{Automaton, Verdict};
//!
//! let nfa = Automaton::builder()
//!     .states(vec![0, 1, 2])
//!     .alphabet(vec!['a', 'b'])
//!     .transitions(vec![(0, Some('a'), vec![0, 1]), (0, Some('b'), vec![0])])
//!     .transition(1, 'b', 2)
//!     .initial(0)
//!     .accept(2)
//!     .build()
//!     .unwrap();
//!
//! let dfa = nfa.powerset_construction();
//! assert!(dfa.is_deterministic());
//! assert!(dfa.simulate("bab".chars()).unwrap().is_accepted());
//! assert_eq!(dfa.simulate("ba".chars()).unwrap(), Verdict::Rejected);
//!
//! // the same runs, without converting by hand
//! let path = nfa.check("bab".chars()).unwrap().path().unwrap().to_vec();
//! assert_eq!(path.len(), 4);
//! assert!(path[3].contains(&2));
//! assert_eq!(nfa.check("ba".chars()).unwrap(), Verdict::Rejected);
//! ```

pub mod automaton;
pub mod dfa;
pub mod error;
pub mod nfa;

pub use crate::automaton::{Automaton, AutomatonBuilder};
pub use crate::dfa::Verdict;
pub use crate::error::{MalformedAutomaton, SimulationError};
pub use crate::nfa::{ConvertOptions, Subset, Traversal};

use std::error::Error;
use std::fmt::{self, Debug, Display};

/// An automaton description that refers to states or symbols it never declared.
///
/// Raised by `AutomatonBuilder::build` (and `Automaton::closure` for unknown
/// query states); a malformed description never yields an `Automaton`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedAutomaton<S, A> {
    /// No initial state was given.
    MissingInitial,
    UnknownInitial(S),
    UnknownAccepting(S),
    /// A transition source (or closure query) that is not a declared state.
    UnknownState(S),
    UnknownTarget {
        from: S,
        symbol: Option<A>,
        to: S,
    },
    /// A non-epsilon transition label outside the alphabet.
    UnknownSymbol { from: S, symbol: A },
}

impl<S: Debug, A: Debug> Display for MalformedAutomaton<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedAutomaton::MissingInitial => write!(f, "automaton has no initial state"),
            MalformedAutomaton::UnknownInitial(s) => {
                write!(f, "initial state {:?} is not a declared state", s)
            }
            MalformedAutomaton::UnknownAccepting(s) => {
                write!(f, "accepting state {:?} is not a declared state", s)
            }
            MalformedAutomaton::UnknownState(s) => {
                write!(f, "state {:?} is not a declared state", s)
            }
            MalformedAutomaton::UnknownTarget { from, symbol: Some(symbol), to } => write!(
                f,
                "transition {:?} -{:?}-> {:?} targets an undeclared state",
                from, symbol, to
            ),
            MalformedAutomaton::UnknownTarget { from, symbol: None, to } => write!(
                f,
                "epsilon transition {:?} -> {:?} targets an undeclared state",
                from, to
            ),
            MalformedAutomaton::UnknownSymbol { from, symbol } => write!(
                f,
                "transition from {:?} uses symbol {:?} outside the alphabet",
                from, symbol
            ),
        }
    }
}

impl<S: Debug, A: Debug> Error for MalformedAutomaton<S, A> {}

/// A run that could not be completed. Rejection is not an error, see `Verdict`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimulationError<S, A> {
    /// The run reached `state` and found no move on `symbol`.
    UndefinedTransition { state: S, symbol: A },
    /// The automaton has epsilon edges or multi-target transitions, so there is
    /// no unique run to walk. Determinize it first (or use `Automaton::check`).
    Nondeterministic,
}

impl<S: Debug, A: Debug> Display for SimulationError<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::UndefinedTransition { state, symbol } => {
                write!(f, "no transition from {:?} on {:?}", state, symbol)
            }
            SimulationError::Nondeterministic => {
                write!(f, "cannot walk a nondeterministic automaton directly")
            }
        }
    }
}

impl<S: Debug, A: Debug> Error for SimulationError<S, A> {}

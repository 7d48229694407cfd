use std::collections::HashMap;
use std::hash::Hash;

use bit_set::BitSet;
use bit_vec::BitVec;
use indexmap::IndexSet;

use crate::error::MalformedAutomaton;

/// Dense index of a state, in declaration order.
pub(crate) type StateRef = usize;
/// Dense index of an alphabet symbol, in declaration order.
pub(crate) type SymbolRef = usize;

pub(crate) const AUTO_START: StateRef = 0;

/// A finite automaton over states `S` and symbols `A`.
///
/// The same shape holds both nondeterministic and deterministic automata: a
/// transition label is `Option<symbol>`, `None` being an epsilon edge, and
/// every label maps to a set of targets. Whether a value is deterministic is
/// a property of its table, see [`Automaton::is_deterministic`].
///
/// Values are only obtained through [`AutomatonBuilder::build`] (or
/// [`Automaton::build`]), which checks every reference, and are never mutated
/// afterwards.
#[derive(Clone, Debug)]
pub struct Automaton<S, A> {
    pub(crate) states: IndexSet<S>,
    pub(crate) alphabet: IndexSet<A>,
    // StateRef -> (Some(SymbolRef) or None for epsilon -> Set<StateRef>); sets are never empty
    pub(crate) transitions: Vec<HashMap<Option<SymbolRef>, BitSet>>,
    pub(crate) initial: StateRef,
    pub(crate) finals: BitVec,
}

impl<S, A> Automaton<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    pub fn builder() -> AutomatonBuilder<S, A> {
        AutomatonBuilder::new()
    }

    /// Builds and validates an automaton in one call.
    ///
    /// `transitions` lists `(from, label, targets)`, with a `None` label for
    /// epsilon edges. Repeated entries for the same `(from, label)` are merged.
    pub fn build<IS, IA, IT, T, IF>(
        states: IS,
        alphabet: IA,
        transitions: IT,
        initial: S,
        accepting: IF,
    ) -> Result<Self, MalformedAutomaton<S, A>>
    where
        IS: IntoIterator<Item = S>,
        IA: IntoIterator<Item = A>,
        IT: IntoIterator<Item = (S, Option<A>, T)>,
        T: IntoIterator<Item = S>,
        IF: IntoIterator<Item = S>,
    {
        Self::builder()
            .states(states)
            .alphabet(alphabet)
            .transitions(transitions)
            .initial(initial)
            .accepting(accepting)
            .build()
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// The states, in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.states.iter()
    }

    pub fn alphabet(&self) -> impl Iterator<Item = &A> + '_ {
        self.alphabet.iter()
    }

    pub fn initial(&self) -> &S {
        &self.states[self.initial]
    }

    pub fn accepting(&self) -> impl Iterator<Item = &S> + '_ {
        self.finals
            .iter()
            .enumerate()
            .filter(|&(_, is_final)| is_final)
            .map(move |(state, _)| &self.states[state])
    }

    pub fn is_accepting(&self, state: &S) -> bool {
        self.states
            .get_index_of(state)
            .map_or(false, |state| self.finals[state])
    }

    /// The direct targets of `state` on `symbol` (`None` for epsilon).
    ///
    /// Epsilon edges are not followed; unknown states or symbols have no targets.
    pub fn targets<'a>(
        &'a self,
        state: &S,
        symbol: Option<&A>,
    ) -> impl Iterator<Item = &'a S> + 'a {
        let targets = self.states.get_index_of(state).and_then(|state| {
            let label = match symbol {
                Some(symbol) => Some(self.alphabet.get_index_of(symbol)?),
                None => None,
            };
            self.transitions[state].get(&label)
        });
        targets
            .into_iter()
            .flat_map(move |targets| targets.iter().map(move |to| &self.states[to]))
    }

    /// Every edge of the table as `(from, label, to)`, `None` labels being epsilon edges.
    pub fn transitions(&self) -> impl Iterator<Item = (&S, Option<&A>, &S)> + '_ {
        self.transitions
            .iter()
            .enumerate()
            .flat_map(move |(from, row)| {
                row.iter().flat_map(move |(&label, targets)| {
                    targets.iter().map(move |to| {
                        (
                            &self.states[from],
                            label.map(|symbol| &self.alphabet[symbol]),
                            &self.states[to],
                        )
                    })
                })
            })
    }

    /// All epsilon edges as `(from, to)` pairs.
    pub fn epsilon_transitions(&self) -> impl Iterator<Item = (&S, &S)> + '_ {
        self.transitions()
            .filter(|(_, label, _)| label.is_none())
            .map(|(from, _, to)| (from, to))
    }

    /// No epsilon edges and at most one target per (state, symbol).
    pub fn is_deterministic(&self) -> bool {
        self.transitions.iter().all(|row| {
            row.iter()
                .all(|(label, targets)| label.is_some() && targets.len() <= 1)
        })
    }

    pub(crate) fn index_of(&self, state: &S) -> Option<StateRef> {
        self.states.get_index_of(state)
    }
}

/// Collects the parts of an automaton; [`AutomatonBuilder::build`] validates them.
#[derive(Clone, Debug)]
pub struct AutomatonBuilder<S, A> {
    states: Vec<S>,
    alphabet: Vec<A>,
    transitions: Vec<(S, Option<A>, S)>,
    initial: Option<S>,
    accepting: Vec<S>,
}

impl<S, A> Default for AutomatonBuilder<S, A> {
    fn default() -> Self {
        AutomatonBuilder {
            states: Vec::new(),
            alphabet: Vec::new(),
            transitions: Vec::new(),
            initial: None,
            accepting: Vec::new(),
        }
    }
}

impl<S, A> AutomatonBuilder<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&mut self, state: S) -> &mut Self {
        self.states.push(state);
        self
    }

    pub fn states<I: IntoIterator<Item = S>>(&mut self, states: I) -> &mut Self {
        self.states.extend(states);
        self
    }

    pub fn symbol(&mut self, symbol: A) -> &mut Self {
        self.alphabet.push(symbol);
        self
    }

    pub fn alphabet<I: IntoIterator<Item = A>>(&mut self, alphabet: I) -> &mut Self {
        self.alphabet.extend(alphabet);
        self
    }

    pub fn transition(&mut self, from: S, on: A, to: S) -> &mut Self {
        self.transitions.push((from, Some(on), to));
        self
    }

    pub fn epsilon(&mut self, from: S, to: S) -> &mut Self {
        self.transitions.push((from, None, to));
        self
    }

    /// Adds `(from, label, targets)` entries, `None` labels being epsilon edges.
    pub fn transitions<I, T>(&mut self, transitions: I) -> &mut Self
    where
        I: IntoIterator<Item = (S, Option<A>, T)>,
        T: IntoIterator<Item = S>,
    {
        for (from, on, targets) in transitions {
            for to in targets {
                self.transitions.push((from.clone(), on.clone(), to));
            }
        }
        self
    }

    pub fn initial(&mut self, state: S) -> &mut Self {
        self.initial = Some(state);
        self
    }

    pub fn accept(&mut self, state: S) -> &mut Self {
        self.accepting.push(state);
        self
    }

    pub fn accepting<I: IntoIterator<Item = S>>(&mut self, states: I) -> &mut Self {
        self.accepting.extend(states);
        self
    }

    /// Checks every reference against the declared states and alphabet.
    pub fn build(&self) -> Result<Automaton<S, A>, MalformedAutomaton<S, A>> {
        let states: IndexSet<S> = self.states.iter().cloned().collect();
        let alphabet: IndexSet<A> = self.alphabet.iter().cloned().collect();

        let initial = match &self.initial {
            None => return Err(MalformedAutomaton::MissingInitial),
            Some(initial) => states
                .get_index_of(initial)
                .ok_or_else(|| MalformedAutomaton::UnknownInitial(initial.clone()))?,
        };

        let mut finals = BitVec::from_elem(states.len(), false);
        for state in &self.accepting {
            let state = states
                .get_index_of(state)
                .ok_or_else(|| MalformedAutomaton::UnknownAccepting(state.clone()))?;
            finals.set(state, true);
        }

        let mut transitions = vec![HashMap::new(); states.len()];
        for (from, on, to) in &self.transitions {
            let from_ref = states
                .get_index_of(from)
                .ok_or_else(|| MalformedAutomaton::UnknownState(from.clone()))?;
            let label = match on {
                None => None,
                Some(symbol) => Some(alphabet.get_index_of(symbol).ok_or_else(|| {
                    MalformedAutomaton::UnknownSymbol {
                        from: from.clone(),
                        symbol: symbol.clone(),
                    }
                })?),
            };
            let to_ref = states
                .get_index_of(to)
                .ok_or_else(|| MalformedAutomaton::UnknownTarget {
                    from: from.clone(),
                    symbol: on.clone(),
                    to: to.clone(),
                })?;
            transitions[from_ref]
                .entry(label)
                .or_insert_with(|| BitSet::with_capacity(states.len()))
                .insert(to_ref);
        }

        Ok(Automaton {
            states,
            alphabet,
            transitions,
            initial,
            finals,
        })
    }
}

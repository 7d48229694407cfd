use std::collections::HashMap;
use std::collections::VecDeque;
use std::hash::Hash;
use std::slice;

use bit_set::BitSet;
use bit_vec::BitVec;
use log::{debug, trace};

use crate::automaton::{Automaton, StateRef, SymbolRef, AUTO_START};
use crate::error::MalformedAutomaton;

/// A composite state: a set of states of the automaton it was built from.
///
/// The members are kept in the declaration order of the original automaton,
/// so two subsets compare equal exactly when they hold the same states.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subset<S>(Vec<S>);

impl<S> Subset<S> {
    pub fn iter(&self) -> slice::Iter<'_, S> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, state: &S) -> bool
    where
        S: PartialEq,
    {
        self.0.contains(state)
    }
}

impl<'a, S> IntoIterator for &'a Subset<S> {
    type Item = &'a S;
    type IntoIter = slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Order in which discovered composite states are expanded.
///
/// Only the numbering of the resulting states depends on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Expand the most recently discovered state first (a stack).
    DepthFirst,
    /// Expand states in discovery order (a queue).
    BreadthFirst,
}

impl Default for Traversal {
    fn default() -> Self {
        Traversal::DepthFirst
    }
}

impl Traversal {
    fn next(self, worklist: &mut VecDeque<StateRef>) -> Option<StateRef> {
        match self {
            Traversal::DepthFirst => worklist.pop_back(),
            Traversal::BreadthFirst => worklist.pop_front(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub order: Traversal,
}

impl<S, A> Automaton<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    /// Epsilon closure of `states`: every state reachable through zero or more
    /// epsilon edges.
    pub fn closure<'a, I>(&self, states: I) -> Result<Subset<S>, MalformedAutomaton<S, A>>
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        let mut set = BitSet::with_capacity(self.num_states());
        for state in states {
            let state = self
                .index_of(state)
                .ok_or_else(|| MalformedAutomaton::UnknownState(state.clone()))?;
            set.insert(state);
        }
        Ok(self.subset(&self.epsilon_closure(&set)))
    }

    /// Grows the set until no epsilon edge leaves it.
    pub(crate) fn epsilon_closure(&self, states: &BitSet) -> BitSet {
        let mut closure = states.clone();
        loop {
            let mut next = closure.clone();
            for state in &closure {
                if let Some(targets) = self.transitions[state].get(&None) {
                    next.union_with(targets);
                }
            }
            // next is a superset of closure, so equal sizes mean a fixed point
            if next.len() == closure.len() {
                return closure;
            }
            closure = next;
        }
    }

    /// Direct targets of any state in `states` on `symbol`, epsilon edges not followed.
    #[inline]
    fn next_states(&self, states: &BitSet, symbol: SymbolRef) -> BitSet {
        let mut nxt_states = BitSet::with_capacity(self.num_states());
        for state in states {
            if let Some(targets) = self.transitions[state].get(&Some(symbol)) {
                nxt_states.union_with(targets);
            }
        }
        nxt_states
    }

    fn subset(&self, states: &BitSet) -> Subset<S> {
        Subset(states.iter().map(|state| self.states[state].clone()).collect())
    }

    pub fn powerset_construction(&self) -> Automaton<Subset<S>, A> {
        self.powerset_construction_with(&ConvertOptions::default())
    }

    /// Subset construction: the result is deterministic, accepts the same
    /// language, and its states are the reachable epsilon-closed subsets.
    ///
    /// A symbol with no move from a subset gets no transition (never a
    /// transition to the empty subset). The number of states can grow up to
    /// 2^n for n input states.
    pub fn powerset_construction_with(&self, options: &ConvertOptions) -> Automaton<Subset<S>, A> {
        let mut start = BitSet::with_capacity(self.num_states());
        start.insert(self.initial);
        let start = self.epsilon_closure(&start);
        trace!("Add state {}: {:?}", AUTO_START, start);

        let mut subsets = vec![start.clone()];
        let mut states_map: HashMap<BitSet, StateRef> = HashMap::new();
        states_map.insert(start, AUTO_START);
        let mut transitions: Vec<HashMap<Option<SymbolRef>, BitSet>> = vec![HashMap::new()];

        let mut visited = BitSet::new();
        let mut worklist = VecDeque::new();
        worklist.push_back(AUTO_START);

        while let Some(cur_num) = options.order.next(&mut worklist) {
            if !visited.insert(cur_num) {
                continue;
            }
            for symbol in 0..self.alphabet.len() {
                let moved = self.next_states(&subsets[cur_num], symbol);

                // No move; the closure of nothing is nothing
                if moved.is_empty() {
                    continue;
                }
                let nxt_states = self.epsilon_closure(&moved);

                let nxt_num = match states_map.get(&nxt_states) {
                    Some(&nxt_num) => nxt_num,
                    None => {
                        let nxt_num = subsets.len();
                        trace!("Add state {}: {:?}", nxt_num, nxt_states);
                        subsets.push(nxt_states.clone());
                        transitions.push(HashMap::new());
                        states_map.insert(nxt_states, nxt_num);
                        worklist.push_back(nxt_num);
                        nxt_num
                    }
                };
                trace!("{} -{}-> {}", cur_num, symbol, nxt_num);

                let mut target = BitSet::new();
                target.insert(nxt_num);
                transitions[cur_num].insert(Some(symbol), target);
            }
        }

        let finals: BitVec = subsets
            .iter()
            .map(|states| states.iter().any(|state| self.finals[state]))
            .collect();

        debug!(
            "Powerset construction: {} states -> {} states",
            self.num_states(),
            subsets.len()
        );

        Automaton {
            states: subsets.iter().map(|states| self.subset(states)).collect(),
            alphabet: self.alphabet.clone(),
            transitions,
            initial: AUTO_START,
            finals,
        }
    }

    pub fn to_dfa(&self) -> Automaton<Subset<S>, A> {
        self.powerset_construction()
    }
}

//! Suffix automaton: the minimal DFA recognising every substring of a text.
//!
//! Built online, one symbol at a time. Each state is an endpos-equivalence
//! class: the substrings of lengths `link.length + 1 ..= length` that end at
//! exactly the same set of positions. A text of length `n >= 2` yields at
//! most `2n - 1` states.
//!
//! Transition storage is a type parameter: [`SparseTransitions`] keys a hash
//! map by raw byte, [`DenseTransitions`] is a fixed array indexed by an
//! [`Alphabet`] index.

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use rustc_hash::FxHashMap;

/// Index of a state; the initial state is always `ROOT`
pub type StateId = u32;

/// The initial state (empty string)
pub const ROOT: StateId = 0;

const NO_STATE: StateId = StateId::MAX;

/// Outgoing transitions of one state.
pub trait Transitions: Clone + Default {
    /// Whether `symbol` can label a transition in this storage
    fn accepts(_symbol: u8) -> bool {
        true
    }

    fn get(&self, symbol: u8) -> Option<StateId>;

    fn set(&mut self, symbol: u8, target: StateId);

    /// All `(symbol, target)` pairs, in no particular order
    fn iter(&self) -> impl Iterator<Item = (u8, StateId)> + '_;
}

/// Hash map transitions for large or sparse alphabets
#[derive(Debug, Clone, Default)]
pub struct SparseTransitions(FxHashMap<u8, StateId>);

impl Transitions for SparseTransitions {
    #[inline]
    fn get(&self, symbol: u8) -> Option<StateId> {
        self.0.get(&symbol).copied()
    }

    #[inline]
    fn set(&mut self, symbol: u8, target: StateId) {
        self.0.insert(symbol, target);
    }

    fn iter(&self) -> impl Iterator<Item = (u8, StateId)> + '_ {
        self.0.iter().map(|(&symbol, &target)| (symbol, target))
    }
}

/// Array transitions for small alphabets; symbols are alphabet indices `< A`
#[derive(Debug, Clone)]
pub struct DenseTransitions<const A: usize>([StateId; A]);

impl<const A: usize> Default for DenseTransitions<A> {
    fn default() -> Self {
        Self([NO_STATE; A])
    }
}

impl<const A: usize> Transitions for DenseTransitions<A> {
    #[inline]
    fn accepts(symbol: u8) -> bool {
        (symbol as usize) < A
    }

    #[inline]
    fn get(&self, symbol: u8) -> Option<StateId> {
        match self.0.get(symbol as usize) {
            Some(&NO_STATE) | None => None,
            Some(&target) => Some(target),
        }
    }

    #[inline]
    fn set(&mut self, symbol: u8, target: StateId) {
        self.0[symbol as usize] = target;
    }

    fn iter(&self) -> impl Iterator<Item = (u8, StateId)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &target)| target != NO_STATE)
            .map(|(symbol, &target)| (symbol as u8, target))
    }
}

/// One endpos-equivalence class
#[derive(Debug, Clone)]
pub struct State<M> {
    /// Length of the longest string in the class
    pub length: usize,
    /// Suffix link; `None` only for the root
    pub link: Option<StateId>,
    /// End position of the first occurrence; `None` only for the root
    pub first_pos: Option<usize>,
    next: M,
}

impl<M: Transitions> State<M> {
    pub fn transition(&self, symbol: u8) -> Option<StateId> {
        self.next.get(symbol)
    }

    pub fn transitions(&self) -> impl Iterator<Item = (u8, StateId)> + '_ {
        self.next.iter()
    }
}

/// First and last end positions of a state's substrings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndposSpan {
    pub first: usize,
    pub last: usize,
}

/// Suffix automaton over byte symbols
#[derive(Debug, Clone)]
pub struct SuffixAutomaton<M = SparseTransitions> {
    states: Vec<State<M>>,
    /// State of the whole text seen so far
    last: StateId,
}

impl SuffixAutomaton<SparseTransitions> {
    /// Build the automaton of `text`, accepting any byte
    pub fn from_text(text: &[u8]) -> Self {
        let mut automaton = Self::with_capacity(text.len());
        for &symbol in text {
            automaton.push(symbol);
        }
        automaton.log_summary();
        automaton
    }

    /// Cumulative number of distinct substrings of every prefix of `text`
    pub fn substring_counts(text: &[u8]) -> Vec<u64> {
        let mut automaton = Self::with_capacity(text.len());
        let mut total = 0u64;
        text.iter()
            .map(|&symbol| {
                total += automaton.push(symbol) as u64;
                total
            })
            .collect()
    }
}

impl<const A: usize> SuffixAutomaton<DenseTransitions<A>> {
    /// Build the automaton of `text` with array transitions.
    ///
    /// Symbols are stored as alphabet indices, so queries such as
    /// [`contains`](SuffixAutomaton::contains) take encoded input. Fails if
    /// the alphabet does not fit `A` or the text has a symbol outside it.
    pub fn from_text_in(text: &[u8], alphabet: &Alphabet) -> Result<Self> {
        if alphabet.len() > A {
            return Err(Error::InvalidAlphabet(alphabet.len()));
        }
        let encoded = alphabet.encode(text)?;

        let mut automaton = Self::with_capacity(text.len());
        for index in encoded {
            automaton.push(index as u8);
        }
        automaton.log_summary();
        Ok(automaton)
    }
}

impl<M: Transitions> SuffixAutomaton<M> {
    /// Automaton of the empty string
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Reserve room for the states of a text of length `n`
    pub fn with_capacity(n: usize) -> Self {
        let mut states = Vec::with_capacity((2 * n).max(1));
        states.push(State {
            length: 0,
            link: None,
            first_pos: None,
            next: M::default(),
        });
        Self { states, last: ROOT }
    }

    /// Append one symbol and return how many new distinct substrings it
    /// created: `length(cur) - length(link(cur))`.
    ///
    /// Fails without changing the automaton if the transition storage cannot
    /// hold `symbol` (an index `>= A` for [`DenseTransitions`]).
    pub fn extend(&mut self, symbol: u8) -> Result<usize> {
        if !M::accepts(symbol) {
            return Err(Error::InvalidSymbol {
                symbol,
                position: self.text_len(),
            });
        }
        Ok(self.push(symbol))
    }

    fn push(&mut self, symbol: u8) -> usize {
        let cur = self.states.len() as StateId;
        let last_length = self.states[self.last as usize].length;
        self.states.push(State {
            length: last_length + 1,
            link: None,
            first_pos: Some(last_length),
            next: M::default(),
        });

        // Add the missing transitions along the suffix path of `last`
        let mut walk = Some(self.last);
        let mut existing = None;
        while let Some(p) = walk {
            let state = &mut self.states[p as usize];
            if let Some(q) = state.next.get(symbol) {
                existing = Some((p, q));
                break;
            }
            state.next.set(symbol, cur);
            walk = state.link;
        }

        let link = match existing {
            None => ROOT,
            Some((p, q)) if self.states[p as usize].length + 1 == self.states[q as usize].length => q,
            Some((p, q)) => self.split(p, q, symbol),
        };

        self.states[cur as usize].link = Some(link);
        self.last = cur;
        self.states[cur as usize].length - self.states[link as usize].length
    }

    /// Clone `q` with length `length(p) + 1` and redirect every `symbol`
    /// transition on the suffix path of `p` that still points at `q`.
    fn split(&mut self, p: StateId, q: StateId, symbol: u8) -> StateId {
        let clone = self.states.len() as StateId;
        let mut cloned = self.states[q as usize].clone();
        cloned.length = self.states[p as usize].length + 1;
        self.states.push(cloned);

        let mut walk = Some(p);
        while let Some(id) = walk {
            let state = &mut self.states[id as usize];
            if state.next.get(symbol) != Some(q) {
                break;
            }
            state.next.set(symbol, clone);
            walk = state.link;
        }

        self.states[q as usize].link = Some(clone);
        clone
    }

    /// Number of states, including the root
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether nothing has been appended, so only the root exists
    pub fn is_empty(&self) -> bool {
        self.states.len() == 1
    }

    pub fn state(&self, id: StateId) -> &State<M> {
        &self.states[id as usize]
    }

    pub fn states(&self) -> &[State<M>] {
        &self.states
    }

    /// State of the whole text
    pub fn last(&self) -> StateId {
        self.last
    }

    /// Length of the text appended so far
    pub fn text_len(&self) -> usize {
        self.states[self.last as usize].length
    }

    fn log_summary(&self) {
        log::debug!(
            "suffix automaton: {} states for {} symbols",
            self.len(),
            self.text_len()
        );
    }

    /// Total number of distinct non-empty substrings
    pub fn distinct_substrings(&self) -> u64 {
        self.states
            .iter()
            .filter_map(|state| {
                let link = state.link?;
                Some((state.length - self.states[link as usize].length) as u64)
            })
            .sum()
    }

    /// Whether `pattern` is a substring of the text
    pub fn contains(&self, pattern: &[u8]) -> bool {
        let mut state = ROOT;
        for &symbol in pattern {
            match self.states[state as usize].next.get(symbol) {
                Some(next) => state = next,
                None => return false,
            }
        }
        true
    }

    /// State ids sorted by decreasing `length` (counting sort), so every state
    /// comes before its suffix link.
    fn by_decreasing_length(&self) -> Vec<StateId> {
        let max_length = self.text_len();
        let mut buckets = vec![0usize; max_length + 2];
        for state in &self.states {
            buckets[state.length + 1] += 1;
        }
        for i in 1..buckets.len() {
            buckets[i] += buckets[i - 1];
        }

        let mut order = vec![ROOT; self.states.len()];
        for (id, state) in self.states.iter().enumerate() {
            order[buckets[state.length]] = id as StateId;
            buckets[state.length] += 1;
        }
        order.reverse();
        order
    }

    /// First and last end position of every state's substrings, indexed by
    /// state id (`None` for the root).
    ///
    /// End positions flow from each state to its suffix link in decreasing
    /// length order.
    pub fn endpos_spans(&self) -> Vec<Option<EndposSpan>> {
        let mut spans: Vec<Option<EndposSpan>> = self
            .states
            .iter()
            .map(|state| state.first_pos.map(|pos| EndposSpan { first: pos, last: pos }))
            .collect();

        for id in self.by_decreasing_length() {
            let (Some(link), Some(span)) = (self.states[id as usize].link, spans[id as usize])
            else {
                continue;
            };
            let target = &mut spans[link as usize];
            *target = Some(match *target {
                Some(current) => EndposSpan {
                    first: current.first.min(span.first),
                    last: current.last.max(span.last),
                },
                None if link == ROOT => continue,
                None => span,
            });
        }

        spans
    }

    /// Number of distinct substrings that occur at least twice without the
    /// occurrences overlapping.
    pub fn non_overlapping_repeats(&self) -> u64 {
        let spans = self.endpos_spans();
        let mut count = 0u64;

        for (state, span) in self.states.iter().zip(&spans) {
            let (Some(link), Some(span)) = (state.link, span) else {
                continue;
            };
            let shortest = self.states[link as usize].length + 1;
            // Two occurrences ending `gap` apart fit side by side up to length `gap`
            let gap = span.last - span.first;
            let longest = state.length.min(gap);
            if longest >= shortest {
                count += (longest - shortest + 1) as u64;
            }
        }

        count
    }
}

impl<M: Transitions> Default for SuffixAutomaton<M> {
    fn default() -> Self {
        Self::new()
    }
}

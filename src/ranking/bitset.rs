//! Word-packed dominance sets for merge non-dominated sorting.
//!
//! Solutions are addressed by their position in the lexicographic order of
//! the objective vectors (the *sort index*). Every solution `s` owns a bit
//! vector whose bit `j` means "`j` is still a candidate dominator of `s`":
//! it is no worse than `s` in every objective swept so far. Because `j < s`
//! in lexicographic order is necessary for `j` to dominate `s`, the vector
//! of `s` only spans words `0..=s / 64`.
//!
//! Each vector carries an explicit `[first, last]` word range outside of
//! which all words are zero, so intersections and rank scans touch only
//! the words that can still hold a set bit.

const WORD_BITS: usize = 64;

/// Inclusive word range. `first > last` encodes the empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WordRange {
    first: usize,
    last: usize,
}

impl WordRange {
    const EMPTY: WordRange = WordRange { first: 1, last: 0 };

    fn is_empty(self) -> bool {
        self.first > self.last
    }
}

/// Bitset state for one merge non-dominated sort run.
#[derive(Debug)]
pub(super) struct BitsetManager {
    /// Candidate dominator bits per solution.
    bitsets: Vec<Vec<u64>>,
    ranges: Vec<WordRange>,
    /// Solutions already visited in the current sweep.
    incremental: Vec<u64>,
    incremental_range: WordRange,
    ranking: Vec<usize>,
    /// Upper bound of the ranks assigned so far within each word.
    word_ranking: Vec<usize>,
    max_rank: usize,
}

impl BitsetManager {
    pub(super) fn new(n: usize) -> Self {
        let words = n.div_ceil(WORD_BITS);
        Self {
            bitsets: vec![Vec::new(); n],
            ranges: vec![WordRange::EMPTY; n],
            incremental: vec![0; words],
            incremental_range: WordRange::EMPTY,
            ranking: vec![0; n],
            word_ranking: vec![0; words],
            max_rank: 0,
        }
    }

    /// Rank computed for sort index `s`.
    pub(super) fn ranking(&self, s: usize) -> usize {
        self.ranking[s]
    }

    /// Marks `s` as visited in the current sweep.
    pub(super) fn update_incremental(&mut self, s: usize) {
        let w = s / WORD_BITS;
        self.incremental[w] |= 1u64 << (s % WORD_BITS);
        if self.incremental_range.is_empty() {
            self.incremental_range = WordRange { first: w, last: w };
        } else {
            self.incremental_range.first = self.incremental_range.first.min(w);
            self.incremental_range.last = self.incremental_range.last.max(w);
        }
    }

    /// Forgets every visited solution before a new sweep.
    pub(super) fn clear_incremental(&mut self) {
        let r = self.incremental_range;
        if !r.is_empty() {
            self.incremental[r.first..=r.last].fill(0);
        }
        self.incremental_range = WordRange::EMPTY;
    }

    /// First sweep: the candidates of `s` are the visited solutions that
    /// precede it lexicographically.
    ///
    /// Returns whether `s` has at least one candidate dominator.
    pub(super) fn initialize_solution_bitset(&mut self, s: usize) -> bool {
        let own_word = s / WORD_BITS;
        let inc = self.incremental_range;
        let mut words = vec![0u64; own_word + 1];
        if inc.is_empty() || inc.first > own_word {
            self.bitsets[s] = words;
            self.ranges[s] = WordRange::EMPTY;
            return false;
        }

        let last = inc.last.min(own_word);
        words[inc.first..=last].copy_from_slice(&self.incremental[inc.first..=last]);
        if last == own_word {
            words[own_word] &= below_mask(s);
        }
        self.bitsets[s] = words;
        self.ranges[s] = trim(&self.bitsets[s], WordRange { first: inc.first, last });
        !self.ranges[s].is_empty()
    }

    /// Later sweeps: drops candidates not yet visited in this sweep.
    ///
    /// Returns whether `s` still has at least one candidate dominator.
    pub(super) fn update_solution_dominance(&mut self, s: usize) -> bool {
        let range = self.ranges[s];
        let inc = self.incremental_range;
        if range.is_empty() || inc.is_empty() {
            self.ranges[s] = WordRange::EMPTY;
            return false;
        }

        let first = range.first.max(inc.first);
        let last = range.last.min(inc.last);
        if first > last {
            self.ranges[s] = WordRange::EMPTY;
            return false;
        }

        let words = &mut self.bitsets[s];
        for (word, visited) in words[first..=last]
            .iter_mut()
            .zip(&self.incremental[first..=last])
        {
            *word &= visited;
        }
        let trimmed = trim(words, WordRange { first, last });
        self.ranges[s] = trimmed;
        !trimmed.is_empty()
    }

    /// Assigns the rank of `s` from its (final) dominator set.
    ///
    /// Every dominator of `s` must already be ranked.
    pub(super) fn compute_solution_ranking(&mut self, s: usize) -> usize {
        let range = self.ranges[s];
        let mut rank = 0;
        if !range.is_empty() {
            let words = &self.bitsets[s];
            'words: for w in (range.first..=range.last).rev() {
                // No dominator in this word can lift the rank any further.
                if self.word_ranking[w] < rank {
                    continue;
                }
                let mut bits = words[w];
                while bits != 0 {
                    let j = w * WORD_BITS + bits.trailing_zeros() as usize;
                    bits &= bits - 1;
                    rank = rank.max(self.ranking[j] + 1);
                    if rank > self.max_rank {
                        break 'words;
                    }
                    if rank > self.word_ranking[w] {
                        break;
                    }
                }
            }
        }

        self.ranking[s] = rank;
        self.max_rank = self.max_rank.max(rank);
        let own = &mut self.word_ranking[s / WORD_BITS];
        *own = (*own).max(rank);
        rank
    }
}

/// Bits strictly below `s` within its own word.
fn below_mask(s: usize) -> u64 {
    let bit = s % WORD_BITS;
    if bit == 0 {
        0
    } else {
        (1u64 << bit) - 1
    }
}

/// Shrinks `range` past zero words at both ends.
fn trim(words: &[u64], range: WordRange) -> WordRange {
    let mut first = range.first;
    let mut last = range.last;
    while first <= last && words[first] == 0 {
        first += 1;
    }
    while last > first && words[last] == 0 {
        last -= 1;
    }
    if first > last || words[first] == 0 {
        WordRange::EMPTY
    } else {
        WordRange { first, last }
    }
}

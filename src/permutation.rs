//! Permutation: a bijection over alphabet indices defined in cycle
//! notation.
//!
//! A specification like `"(AELTPHQXRU) (BKNW) (S)"` lists disjoint
//! cycles of symbols; each symbol maps to the next symbol in its cycle,
//! cyclically. Symbols absent from every cycle map to themselves.
//! Forward and inverse index tables are built once at construction, so
//! application is a table lookup.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;

/// A bijection on `0..alphabet size` in cycle notation.
///
/// Immutable once constructed. Owned by exactly one rotor, or by the
/// machine as its plugboard.
///
/// # Examples
///
/// ```
/// use enigma::{Alphabet, Permutation};
///
/// let alpha = Alphabet::upper();
/// let perm = Permutation::new("(BACD)", &alpha).unwrap();
/// assert_eq!(perm.permute(1), 0); // B -> A
/// assert_eq!(perm.invert(0), 1); // A <- B
/// assert_eq!(perm.permute(4), 4); // E is a fixed point
/// ```
#[derive(Debug, Clone)]
pub struct Permutation {
    alphabet: Alphabet,
    cycles: Vec<Vec<usize>>,
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl Permutation {
    /// Parses a cycle-notation specification over the given alphabet.
    ///
    /// Whitespace between and inside groups is ignored. The empty
    /// string is the identity permutation.
    ///
    /// # Errors
    /// - [`EnigmaError::MalformedCycles`] for unbalanced or nested
    ///   parentheses, symbols outside any group, or an empty group.
    /// - [`EnigmaError::SymbolOutOfRange`] for a symbol not in the
    ///   alphabet.
    /// - [`EnigmaError::DuplicateSymbol`] if a symbol appears twice
    ///   (the cycles would not be disjoint).
    pub fn new(cycles: &str, alphabet: &Alphabet) -> Result<Self, EnigmaError> {
        let parsed = Self::parse_cycles(cycles, alphabet)?;
        Ok(Self::from_index_cycles(parsed, alphabet.clone()))
    }

    /// The identity permutation: every index maps to itself.
    pub fn identity(alphabet: &Alphabet) -> Self {
        Self::from_index_cycles(Vec::new(), alphabet.clone())
    }

    /// Builds the forward and inverse tables from parsed cycles.
    ///
    /// Indices absent from every cycle stay at their identity entries,
    /// so the tables are total bijections by construction.
    fn from_index_cycles(cycles: Vec<Vec<usize>>, alphabet: Alphabet) -> Self {
        let size = alphabet.size();
        let mut forward: Vec<usize> = (0..size).collect();
        let mut inverse: Vec<usize> = (0..size).collect();
        for cycle in &cycles {
            for (j, &from) in cycle.iter().enumerate() {
                let to = cycle[(j + 1) % cycle.len()];
                forward[from] = to;
                inverse[to] = from;
            }
        }
        Permutation {
            alphabet,
            cycles,
            forward,
            inverse,
        }
    }

    /// Parses `spec` into cycles of alphabet indices.
    fn parse_cycles(spec: &str, alphabet: &Alphabet) -> Result<Vec<Vec<usize>>, EnigmaError> {
        let mut cycles: Vec<Vec<usize>> = Vec::new();
        let mut current: Option<Vec<usize>> = None;
        let mut seen = vec![false; alphabet.size()];

        for ch in spec.chars() {
            match ch {
                c if c.is_whitespace() => {}
                '(' => {
                    if current.is_some() {
                        return Err(EnigmaError::MalformedCycles(
                            "nested '(' inside a cycle".to_string(),
                        ));
                    }
                    current = Some(Vec::new());
                }
                ')' => match current.take() {
                    Some(cycle) if cycle.is_empty() => {
                        return Err(EnigmaError::MalformedCycles("empty cycle '()'".to_string()));
                    }
                    Some(cycle) => cycles.push(cycle),
                    None => {
                        return Err(EnigmaError::MalformedCycles(
                            "')' without matching '('".to_string(),
                        ));
                    }
                },
                c => {
                    let cycle = current.as_mut().ok_or_else(|| {
                        EnigmaError::MalformedCycles(format!("symbol '{}' outside any cycle", c))
                    })?;
                    let index = alphabet.to_index(c)?;
                    if seen[index] {
                        return Err(EnigmaError::DuplicateSymbol(c));
                    }
                    seen[index] = true;
                    cycle.push(index);
                }
            }
        }
        if current.is_some() {
            return Err(EnigmaError::MalformedCycles(
                "unclosed '(' at end of specification".to_string(),
            ));
        }
        Ok(cycles)
    }

    /// Returns the alphabet this permutation acts on.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the size of the alphabet this permutation acts on.
    pub fn size(&self) -> usize {
        self.alphabet.size()
    }

    /// Applies the permutation to `p`, taken modulo the alphabet size.
    pub fn permute(&self, p: usize) -> usize {
        self.forward[p % self.size()]
    }

    /// Applies the inverse permutation to `c`, taken modulo the
    /// alphabet size.
    pub fn invert(&self, c: usize) -> usize {
        self.inverse[c % self.size()]
    }

    /// Applies the permutation to a symbol.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolOutOfRange`] if `p` is not in the
    /// alphabet.
    pub fn permute_char(&self, p: char) -> Result<char, EnigmaError> {
        let index = self.alphabet.to_index(p)?;
        self.alphabet.to_symbol(self.permute(index))
    }

    /// Applies the inverse permutation to a symbol.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolOutOfRange`] if `c` is not in the
    /// alphabet.
    pub fn invert_char(&self, c: char) -> Result<char, EnigmaError> {
        let index = self.alphabet.to_index(c)?;
        self.alphabet.to_symbol(self.invert(index))
    }

    /// Returns true iff no index maps to itself: every cycle has length
    /// at least 2 and the cycles together cover the whole alphabet.
    pub fn is_derangement(&self) -> bool {
        let mut covered = 0;
        for cycle in &self.cycles {
            if cycle.len() < 2 {
                return false;
            }
            covered += cycle.len();
        }
        covered == self.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper() -> Alphabet {
        Alphabet::upper()
    }

    /// Rotor I of the historical naval catalog.
    const NAVAL_I: &str = "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)";

    #[test]
    fn test_permute_follows_cycle() {
        let perm = Permutation::new(NAVAL_I, &upper()).unwrap();
        // A -> E, E -> L, U -> A (wraps around the first cycle)
        assert_eq!(perm.permute_char('A').unwrap(), 'E');
        assert_eq!(perm.permute_char('E').unwrap(), 'L');
        assert_eq!(perm.permute_char('U').unwrap(), 'A');
    }

    #[test]
    fn test_invert_follows_cycle_backward() {
        let perm = Permutation::new(NAVAL_I, &upper()).unwrap();
        assert_eq!(perm.invert_char('E').unwrap(), 'A');
        assert_eq!(perm.invert_char('A').unwrap(), 'U');
    }

    #[test]
    fn test_singleton_cycle_is_fixed_point() {
        let perm = Permutation::new(NAVAL_I, &upper()).unwrap();
        assert_eq!(perm.permute_char('S').unwrap(), 'S');
        assert_eq!(perm.invert_char('S').unwrap(), 'S');
    }

    #[test]
    fn test_absent_symbol_is_fixed_point() {
        let perm = Permutation::new("(AB)", &upper()).unwrap();
        assert_eq!(perm.permute_char('Q').unwrap(), 'Q');
        assert_eq!(perm.invert_char('Q').unwrap(), 'Q');
    }

    #[test]
    fn test_permute_wraps_modulo_size() {
        let perm = Permutation::new("(AB)", &upper()).unwrap();
        // 26 wraps to 0 (A), which maps to B (1)
        assert_eq!(perm.permute(26), 1);
        assert_eq!(perm.invert(27), 0);
    }

    #[test]
    fn test_bijection_roundtrip() {
        let perm = Permutation::new(NAVAL_I, &upper()).unwrap();
        for i in 0..26 {
            assert_eq!(perm.invert(perm.permute(i)), i, "invert∘permute at {}", i);
            assert_eq!(perm.permute(perm.invert(i)), i, "permute∘invert at {}", i);
        }
    }

    #[test]
    fn test_identity() {
        let perm = Permutation::identity(&upper());
        for i in 0..26 {
            assert_eq!(perm.permute(i), i);
            assert_eq!(perm.invert(i), i);
        }
        assert!(!perm.is_derangement());
    }

    #[test]
    fn test_empty_spec_is_identity() {
        let perm = Permutation::new("", &upper()).unwrap();
        assert_eq!(perm.permute(7), 7);
    }

    #[test]
    fn test_whitespace_is_structural_only() {
        let spaced = Permutation::new("  ( A B )   (CD)", &upper()).unwrap();
        let dense = Permutation::new("(AB)(CD)", &upper()).unwrap();
        for i in 0..26 {
            assert_eq!(spaced.permute(i), dense.permute(i));
        }
    }

    #[test]
    fn test_derangement_true_for_full_coverage() {
        let reflector =
            "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)";
        let perm = Permutation::new(reflector, &upper()).unwrap();
        assert!(perm.is_derangement());
    }

    #[test]
    fn test_derangement_false_with_singleton() {
        let perm = Permutation::new(NAVAL_I, &upper()).unwrap();
        assert!(!perm.is_derangement());
    }

    #[test]
    fn test_derangement_false_with_partial_coverage() {
        // All cycles length >= 2 but Z (among others) is uncovered.
        let perm = Permutation::new("(AB) (CD)", &upper()).unwrap();
        assert!(!perm.is_derangement());
    }

    #[test]
    fn test_malformed_unclosed_cycle() {
        assert!(matches!(
            Permutation::new("(AB", &upper()),
            Err(EnigmaError::MalformedCycles(_))
        ));
    }

    #[test]
    fn test_malformed_stray_close() {
        assert!(matches!(
            Permutation::new("AB)", &upper()),
            Err(EnigmaError::MalformedCycles(_))
        ));
    }

    #[test]
    fn test_malformed_nested_open() {
        assert!(matches!(
            Permutation::new("((AB))", &upper()),
            Err(EnigmaError::MalformedCycles(_))
        ));
    }

    #[test]
    fn test_malformed_symbol_outside_cycle() {
        assert!(matches!(
            Permutation::new("AB", &upper()),
            Err(EnigmaError::MalformedCycles(_))
        ));
    }

    #[test]
    fn test_malformed_empty_cycle() {
        assert!(matches!(
            Permutation::new("()", &upper()),
            Err(EnigmaError::MalformedCycles(_))
        ));
    }

    #[test]
    fn test_symbol_not_in_alphabet() {
        assert_eq!(
            Permutation::new("(Ab)", &upper()).unwrap_err(),
            EnigmaError::SymbolOutOfRange('b')
        );
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        assert_eq!(
            Permutation::new("(AB) (CA)", &upper()).unwrap_err(),
            EnigmaError::DuplicateSymbol('A')
        );
    }
}

//! Alphabet: ordered bijection between a finite symbol set and
//! contiguous indices `[0, size)`.
//!
//! Every other component works on alphabet indices; the alphabet is the
//! only place symbols are translated to and from them. Immutable once
//! constructed.

use crate::error::EnigmaError;

/// An ordered set of distinct symbols mapped to indices `0..size`.
///
/// Constructed either from an explicit symbol list or from a contiguous
/// inclusive character range. Cheap to clone; each component that needs
/// the alphabet owns its own copy.
///
/// # Examples
///
/// ```
/// use enigma::Alphabet;
///
/// let alpha = Alphabet::from_range('A', 'D').unwrap();
/// assert_eq!(alpha.size(), 4);
/// assert_eq!(alpha.to_index('C').unwrap(), 2);
/// assert_eq!(alpha.to_symbol(3).unwrap(), 'D');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet of all characters from `first` to `last`,
    /// inclusive, in code-point order.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRange`] if `first` sorts after `last`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Alphabet;
    ///
    /// assert!(Alphabet::from_range('A', 'X').is_ok());
    /// assert!(Alphabet::from_range('X', 'A').is_err());
    /// ```
    pub fn from_range(first: char, last: char) -> Result<Self, EnigmaError> {
        if first > last {
            return Err(EnigmaError::InvalidRange { first, last });
        }
        Ok(Alphabet {
            chars: (first..=last).collect(),
        })
    }

    /// Creates an alphabet from an explicit ordered list of symbols.
    ///
    /// # Errors
    /// Returns [`EnigmaError::EmptyAlphabet`] for an empty list and
    /// [`EnigmaError::DuplicateSymbol`] if any symbol repeats.
    pub fn from_symbols(symbols: &[char]) -> Result<Self, EnigmaError> {
        if symbols.is_empty() {
            return Err(EnigmaError::EmptyAlphabet);
        }
        let mut chars = Vec::with_capacity(symbols.len());
        for &ch in symbols {
            if chars.contains(&ch) {
                return Err(EnigmaError::DuplicateSymbol(ch));
            }
            chars.push(ch);
        }
        Ok(Alphabet { chars })
    }

    /// The historical upper-case alphabet `A..=Z`.
    pub fn upper() -> Self {
        Alphabet {
            chars: ('A'..='Z').collect(),
        }
    }

    /// Returns the number of symbols.
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    /// Returns true iff `ch` is one of this alphabet's symbols.
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Returns the index of `ch`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolOutOfRange`] if `ch` is not in the
    /// alphabet.
    pub fn to_index(&self, ch: char) -> Result<usize, EnigmaError> {
        self.chars
            .iter()
            .position(|&c| c == ch)
            .ok_or(EnigmaError::SymbolOutOfRange(ch))
    }

    /// Returns the symbol at `index`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::IndexOutOfRange`] if `index >= size()`.
    pub fn to_symbol(&self, index: usize) -> Result<char, EnigmaError> {
        self.chars
            .get(index)
            .copied()
            .ok_or(EnigmaError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_range() {
        let alpha = Alphabet::from_range('A', 'X').unwrap();
        assert_eq!(alpha.size(), 24);
        assert!(alpha.contains('C'));
        assert!(!alpha.contains('Y'));
        assert_eq!(alpha.to_symbol(3).unwrap(), 'D');
        assert_eq!(alpha.to_index('E').unwrap(), 4);
    }

    #[test]
    fn test_from_range_single_symbol() {
        let alpha = Alphabet::from_range('Q', 'Q').unwrap();
        assert_eq!(alpha.size(), 1);
        assert_eq!(alpha.to_index('Q').unwrap(), 0);
    }

    #[test]
    fn test_from_range_empty() {
        assert_eq!(
            Alphabet::from_range('X', 'A'),
            Err(EnigmaError::InvalidRange {
                first: 'X',
                last: 'A'
            })
        );
    }

    #[test]
    fn test_from_symbols_preserves_order() {
        let alpha = Alphabet::from_symbols(&['Z', 'A', 'M']).unwrap();
        assert_eq!(alpha.size(), 3);
        assert_eq!(alpha.to_index('Z').unwrap(), 0);
        assert_eq!(alpha.to_index('M').unwrap(), 2);
        assert_eq!(alpha.to_symbol(1).unwrap(), 'A');
    }

    #[test]
    fn test_from_symbols_empty() {
        assert_eq!(Alphabet::from_symbols(&[]), Err(EnigmaError::EmptyAlphabet));
    }

    #[test]
    fn test_from_symbols_duplicate() {
        assert_eq!(
            Alphabet::from_symbols(&['A', 'B', 'A']),
            Err(EnigmaError::DuplicateSymbol('A'))
        );
    }

    #[test]
    fn test_to_index_out_of_range() {
        let alpha = Alphabet::from_range('A', 'X').unwrap();
        assert_eq!(
            alpha.to_index('Y'),
            Err(EnigmaError::SymbolOutOfRange('Y'))
        );
    }

    #[test]
    fn test_to_symbol_out_of_range() {
        let alpha = Alphabet::from_range('A', 'X').unwrap();
        assert_eq!(
            alpha.to_symbol(25),
            Err(EnigmaError::IndexOutOfRange {
                index: 25,
                size: 24
            })
        );
    }

    #[test]
    fn test_upper_matches_range() {
        assert_eq!(Alphabet::upper(), Alphabet::from_range('A', 'Z').unwrap());
        assert_eq!(Alphabet::upper().size(), 26);
    }

    #[test]
    fn test_roundtrip_bijection() {
        let alpha = Alphabet::upper();
        for i in 0..alpha.size() {
            let ch = alpha.to_symbol(i).unwrap();
            assert_eq!(alpha.to_index(ch).unwrap(), i);
        }
    }
}

//! Error types for the enigma library.

use thiserror::Error;

/// Errors produced by the enigma library.
///
/// Variants fall into three groups: construction errors (bad alphabet
/// range, malformed cycle notation, non-derangement reflector wiring),
/// validation errors (rotor insertion and settings strings), and
/// operation errors (illegal requests on a reflector). All are
/// fail-fast: the core never retries or substitutes defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Alphabet range constructor given a first symbol after the last.
    #[error("empty range of characters: '{first}' sorts after '{last}'")]
    InvalidRange {
        /// First symbol of the requested range.
        first: char,
        /// Last symbol of the requested range.
        last: char,
    },
    /// Alphabet constructed from an empty symbol list.
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,
    /// A symbol appears more than once in an alphabet or cycle spec.
    #[error("duplicate symbol '{0}'")]
    DuplicateSymbol(char),
    /// A symbol is not part of the alphabet.
    #[error("symbol '{0}' is not in the alphabet")]
    SymbolOutOfRange(char),
    /// An index is not in `0..alphabet size`.
    #[error("index {index} out of range for alphabet of size {size}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The alphabet size it was checked against.
        size: usize,
    },
    /// Cycle notation that cannot be parsed into disjoint cycles.
    #[error("malformed cycle specification: {0}")]
    MalformedCycles(String),
    /// Reflector wiring that is not a derangement.
    #[error("reflector '{0}' wiring must be a derangement")]
    InvalidWiring(String),
    /// Two catalog entries or two slot names share a name.
    #[error("duplicate rotor name '{0}'")]
    DuplicateRotorName(String),
    /// A slot name with no catalog match.
    #[error("unknown rotor '{0}'")]
    UnknownRotor(String),
    /// Rotor name list whose length differs from the slot count.
    #[error("expected {expected} rotor names, got {got}")]
    WrongRotorCount {
        /// Number of slots in the machine.
        expected: usize,
        /// Number of names supplied.
        got: usize,
    },
    /// Slot 0 occupant does not reflect.
    #[error("first rotor '{0}' must be a reflector")]
    MissingReflector(String),
    /// Settings string whose length differs from `num_rotors - 1`.
    #[error("expected setting of length {expected}, got {got}")]
    WrongSettingLength {
        /// Required settings length (`num_rotors - 1`).
        expected: usize,
        /// Length of the string supplied.
        got: usize,
    },
    /// Machine built with fewer than two rotor slots.
    #[error("machine needs at least 2 rotor slots, got {0}")]
    InvalidRotorCount(usize),
    /// Machine built with at least as many pawls as rotor slots.
    #[error("pawl count {pawls} must be less than rotor count {num_rotors}")]
    InvalidPawlCount {
        /// Number of pawls requested.
        pawls: usize,
        /// Number of rotor slots requested.
        num_rotors: usize,
    },
    /// A reflector given a position or ring setting other than 0.
    #[error("reflector '{rotor}' has only one position, got {position}")]
    InvalidPosition {
        /// Name of the reflector.
        rotor: String,
        /// The rejected position index.
        position: usize,
    },
    /// A reflector asked to convert backward.
    #[error("reflector '{0}' does not convert backward")]
    UnsupportedOperation(String),
    /// Settings applied or conversion requested before `insert_rotors`.
    #[error("rotors have not been inserted into the machine")]
    RotorsNotInserted,
}

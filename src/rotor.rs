//! Rotor: one letter-substitution wiring plus a rotatable position.
//!
//! Three kinds share one struct: reflectors (non-rotating, derangement
//! wiring, consulted only forward), fixed rotors (non-rotating but
//! ring-settable), and moving rotors (notched, advanced by the
//! machine's stepping mechanism). Kind-specific behavior is dispatched
//! by matching on a tagged variant rather than a class hierarchy.
//!
//! Rotors are created once per catalog entry; a [`RotorCatalog`] is an
//! immutable blueprint from which each machine clones its own mutable
//! instances at insertion time.

use std::fmt;

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::permutation::Permutation;

/// Capability tag distinguishing the rotor kinds.
///
/// Only the moving kind carries extra data: the notch positions at
/// which the rotor permits its left neighbor to step.
#[derive(Debug, Clone)]
enum RotorKind {
    Reflector,
    Fixed,
    Moving { notches: Vec<usize> },
}

/// A named wiring with a rotational setting and a ring setting.
///
/// `setting` and `ring_setting` are always held in `0..size`. The
/// external contact ring is fixed while the internal wiring rotates
/// with the setting, corrected by the ring setting; the conversion
/// methods model that indirection with a shift on both sides of the
/// wiring lookup.
///
/// # Examples
///
/// ```
/// use enigma::{Alphabet, Permutation, Rotor};
///
/// let alpha = Alphabet::upper();
/// let wiring = Permutation::new(
///     "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)",
///     &alpha,
/// ).unwrap();
/// let mut rotor = Rotor::moving("I", wiring, "Q").unwrap();
/// assert!(rotor.rotates());
/// rotor.set(16).unwrap(); // position Q
/// assert!(rotor.at_notch());
/// ```
#[derive(Debug, Clone)]
pub struct Rotor {
    name: String,
    permutation: Permutation,
    kind: RotorKind,
    setting: usize,
    ring_setting: usize,
}

impl Rotor {
    /// Creates a reflector: non-rotating, single fixed position, wiring
    /// consulted only in the forward direction.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] unless `permutation` is a
    /// derangement.
    pub fn reflector(name: &str, permutation: Permutation) -> Result<Self, EnigmaError> {
        if !permutation.is_derangement() {
            return Err(EnigmaError::InvalidWiring(name.to_string()));
        }
        Ok(Rotor {
            name: name.to_string(),
            permutation,
            kind: RotorKind::Reflector,
            setting: 0,
            ring_setting: 0,
        })
    }

    /// Creates a fixed rotor: never advances, but its position and ring
    /// setting remain adjustable.
    pub fn fixed(name: &str, permutation: Permutation) -> Self {
        Rotor {
            name: name.to_string(),
            permutation,
            kind: RotorKind::Fixed,
            setting: 0,
            ring_setting: 0,
        }
    }

    /// Creates a moving rotor with notches at the given symbols.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolOutOfRange`] if a notch symbol is
    /// not in the wiring's alphabet.
    pub fn moving(name: &str, permutation: Permutation, notches: &str) -> Result<Self, EnigmaError> {
        let notches = notches
            .chars()
            .map(|ch| permutation.alphabet().to_index(ch))
            .collect::<Result<Vec<usize>, EnigmaError>>()?;
        Ok(Rotor {
            name: name.to_string(),
            permutation,
            kind: RotorKind::Moving { notches },
            setting: 0,
            ring_setting: 0,
        })
    }

    /// Returns the rotor's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rotor's alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        self.permutation.alphabet()
    }

    /// Returns the rotor's wiring.
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// Returns the size of the rotor's alphabet.
    pub fn size(&self) -> usize {
        self.permutation.size()
    }

    /// Returns the current rotational setting.
    pub fn setting(&self) -> usize {
        self.setting
    }

    /// Returns the current ring setting.
    pub fn ring_setting(&self) -> usize {
        self.ring_setting
    }

    /// Returns the combined effect of setting and ring setting, which
    /// may be negative.
    pub fn overall_setting(&self) -> isize {
        self.setting as isize - self.ring_setting as isize
    }

    /// Returns true iff this rotor has a ratchet and can move.
    pub fn rotates(&self) -> bool {
        matches!(self.kind, RotorKind::Moving { .. })
    }

    /// Returns true iff this rotor reflects.
    pub fn reflects(&self) -> bool {
        matches!(self.kind, RotorKind::Reflector)
    }

    /// Returns true iff this rotor is positioned to allow the rotor to
    /// its left to advance. Always false for non-moving kinds.
    pub fn at_notch(&self) -> bool {
        match &self.kind {
            RotorKind::Moving { notches } => notches.contains(&self.setting),
            _ => false,
        }
    }

    /// Advances the rotor one position. No-op for non-moving kinds.
    pub fn advance(&mut self) {
        if let RotorKind::Moving { .. } = self.kind {
            self.setting = (self.setting + 1) % self.size();
        }
    }

    /// Sets the rotational setting to `posn`, taken modulo the
    /// alphabet size.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPosition`] if this rotor reflects
    /// and `posn` is not 0.
    pub fn set(&mut self, posn: usize) -> Result<(), EnigmaError> {
        if self.reflects() && posn != 0 {
            return Err(EnigmaError::InvalidPosition {
                rotor: self.name.clone(),
                position: posn,
            });
        }
        self.setting = posn % self.size();
        Ok(())
    }

    /// Sets the rotational setting to the position of symbol `cposn`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolOutOfRange`] if `cposn` is not in
    /// the alphabet, or [`EnigmaError::InvalidPosition`] for a
    /// reflector and a symbol not at index 0.
    pub fn set_char(&mut self, cposn: char) -> Result<(), EnigmaError> {
        let posn = self.alphabet().to_index(cposn)?;
        self.set(posn)
    }

    /// Sets the ring setting to `rset`, taken modulo the alphabet size.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPosition`] if this rotor reflects
    /// and `rset` is not 0.
    pub fn set_ring(&mut self, rset: usize) -> Result<(), EnigmaError> {
        if self.reflects() && rset != 0 {
            return Err(EnigmaError::InvalidPosition {
                rotor: self.name.clone(),
                position: rset,
            });
        }
        self.ring_setting = rset % self.size();
        Ok(())
    }

    /// Sets the ring setting to the position of symbol `rset`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolOutOfRange`] if `rset` is not in
    /// the alphabet, or [`EnigmaError::InvalidPosition`] for a
    /// reflector and a symbol not at index 0.
    pub fn set_ring_char(&mut self, rset: char) -> Result<(), EnigmaError> {
        let posn = self.alphabet().to_index(rset)?;
        self.set_ring(posn)
    }

    /// Converts an input contact index to an output contact index
    /// through the wiring, entering from the right.
    ///
    /// The input is shifted by the overall setting onto the wiring,
    /// permuted, and shifted back, all modulo the alphabet size.
    pub fn convert_forward(&self, p: usize) -> usize {
        let offset = self.overall_setting();
        let shifted = self.wrap(p as isize + offset);
        let permuted = self.permutation.permute(shifted);
        self.wrap(permuted as isize - offset)
    }

    /// Converts an input contact index to an output contact index
    /// through the inverse wiring, entering from the left.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnsupportedOperation`] for a reflector:
    /// its wiring is consulted only once per pass and never inverted.
    pub fn convert_backward(&self, e: usize) -> Result<usize, EnigmaError> {
        if self.reflects() {
            return Err(EnigmaError::UnsupportedOperation(self.name.clone()));
        }
        let offset = self.overall_setting();
        let shifted = self.wrap(e as isize + offset);
        let inverted = self.permutation.invert(shifted);
        Ok(self.wrap(inverted as isize - offset))
    }

    /// Returns both settings to 0, as when freshly inserted into a
    /// machine slot.
    pub(crate) fn reset(&mut self) {
        self.setting = 0;
        self.ring_setting = 0;
    }

    /// Wraps a possibly negative index into `0..size`.
    fn wrap(&self, n: isize) -> usize {
        n.rem_euclid(self.size() as isize) as usize
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotor {}", self.name)
    }
}

/// An immutable catalog of uniquely named rotors.
///
/// The catalog is a blueprint: machines clone entries into their own
/// slots at insertion time, so two machines built from one catalog
/// never share rotor settings.
#[derive(Debug, Clone, Default)]
pub struct RotorCatalog {
    rotors: Vec<Rotor>,
}

impl RotorCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        RotorCatalog { rotors: Vec::new() }
    }

    /// Adds a rotor to the catalog.
    ///
    /// # Errors
    /// Returns [`EnigmaError::DuplicateRotorName`] if a rotor with the
    /// same name is already present.
    pub fn add(&mut self, rotor: Rotor) -> Result<(), EnigmaError> {
        if self.get(rotor.name()).is_some() {
            return Err(EnigmaError::DuplicateRotorName(rotor.name().to_string()));
        }
        self.rotors.push(rotor);
        Ok(())
    }

    /// Returns the rotor named `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Rotor> {
        self.rotors.iter().find(|r| r.name() == name)
    }

    /// Returns the number of catalog entries.
    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    /// Returns true iff the catalog holds no rotors.
    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }
}

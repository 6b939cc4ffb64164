//! Machine: an ordered stack of rotor slots plus a plugboard.
//!
//! Slot 0 holds the reflector; the rightmost slots are the ones the
//! pawls can move. Each converted symbol first steps the mechanism
//! (including the historical double-step anomaly), then travels through
//! the plugboard, right-to-left through every rotor, back left-to-right
//! through every rotor except the reflector, and through the plugboard
//! again.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::permutation::Permutation;
use crate::rotor::{Rotor, RotorCatalog};

/// A complete rotor cipher machine.
///
/// Built from an alphabet, a slot count, a pawl count, and a rotor
/// catalog. The catalog is an immutable blueprint; [`insert_rotors`]
/// clones entries into the machine's own slots, so settings mutated by
/// conversion are private to this machine.
///
/// Setup sequence per message block: [`insert_rotors`] →
/// [`set_rotors`] → optional [`set_ring_setting`] → [`set_plugboard`];
/// then [`convert`] per message. Conversion mutates rotor settings, so
/// re-run the setup sequence to reset for a new message block.
///
/// [`insert_rotors`]: Self::insert_rotors
/// [`set_rotors`]: Self::set_rotors
/// [`set_ring_setting`]: Self::set_ring_setting
/// [`set_plugboard`]: Self::set_plugboard
/// [`convert`]: Self::convert
///
/// # Examples
///
/// ```
/// use enigma::{Alphabet, Machine, Permutation, Rotor, RotorCatalog};
///
/// let alpha = Alphabet::upper();
/// let mut catalog = RotorCatalog::new();
/// catalog.add(Rotor::reflector("B", Permutation::new(
///     "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)",
///     &alpha,
/// ).unwrap()).unwrap()).unwrap();
/// catalog.add(Rotor::moving("I", Permutation::new(
///     "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)",
///     &alpha,
/// ).unwrap(), "Q").unwrap()).unwrap();
///
/// let mut machine = Machine::new(alpha, 2, 1, catalog).unwrap();
/// machine.insert_rotors(&["B", "I"]).unwrap();
/// machine.set_rotors("A").unwrap();
///
/// let cipher = machine.convert("HELLO").unwrap();
/// assert_eq!(cipher.len(), 5);
/// ```
#[derive(Debug)]
pub struct Machine {
    alphabet: Alphabet,
    num_rotors: usize,
    pawls: usize,
    catalog: RotorCatalog,
    slots: Vec<Rotor>,
    plugboard: Permutation,
}

impl Machine {
    /// Creates a machine with `num_rotors` slots, of which the
    /// `pawls` rightmost are mechanically capable of stepping.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRotorCount`] if `num_rotors < 2`,
    /// or [`EnigmaError::InvalidPawlCount`] unless `pawls < num_rotors`.
    pub fn new(
        alphabet: Alphabet,
        num_rotors: usize,
        pawls: usize,
        catalog: RotorCatalog,
    ) -> Result<Self, EnigmaError> {
        if num_rotors < 2 {
            return Err(EnigmaError::InvalidRotorCount(num_rotors));
        }
        if pawls >= num_rotors {
            return Err(EnigmaError::InvalidPawlCount { pawls, num_rotors });
        }
        let plugboard = Permutation::identity(&alphabet);
        Ok(Machine {
            alphabet,
            num_rotors,
            pawls,
            catalog,
            slots: Vec::new(),
            plugboard,
        })
    }

    /// Returns the number of rotor slots.
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Returns the number of pawls, and thus of rotors that can move.
    pub fn num_pawls(&self) -> usize {
        self.pawls
    }

    /// Returns the machine's alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the occupant of `slot`, if rotors have been inserted.
    pub fn rotor(&self, slot: usize) -> Option<&Rotor> {
        self.slots.get(slot)
    }

    /// Fills the slots with catalog rotors named by `names`, in order:
    /// slot 0 receives `names[0]` and must reflect. Entries are cloned
    /// out of the catalog with both settings at 0.
    ///
    /// # Errors
    /// - [`EnigmaError::WrongRotorCount`] if the name count differs
    ///   from the slot count.
    /// - [`EnigmaError::UnknownRotor`] for a name with no catalog match.
    /// - [`EnigmaError::DuplicateRotorName`] for a repeated name.
    /// - [`EnigmaError::MissingReflector`] if `names[0]` does not
    ///   resolve to a reflecting rotor.
    pub fn insert_rotors(&mut self, names: &[&str]) -> Result<(), EnigmaError> {
        if names.len() != self.num_rotors {
            return Err(EnigmaError::WrongRotorCount {
                expected: self.num_rotors,
                got: names.len(),
            });
        }
        let mut slots = Vec::with_capacity(self.num_rotors);
        for (i, &name) in names.iter().enumerate() {
            if names[..i].contains(&name) {
                return Err(EnigmaError::DuplicateRotorName(name.to_string()));
            }
            let mut rotor = self
                .catalog
                .get(name)
                .ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))?
                .clone();
            rotor.reset();
            slots.push(rotor);
        }
        if !slots[0].reflects() {
            return Err(EnigmaError::MissingReflector(names[0].to_string()));
        }
        self.slots = slots;
        Ok(())
    }

    /// Sets the rotor positions from `setting`, whose characters apply
    /// to slots `1..num_rotors` left to right. Slots occupied by a
    /// reflecting rotor are skipped.
    ///
    /// # Errors
    /// - [`EnigmaError::RotorsNotInserted`] before [`Self::insert_rotors`].
    /// - [`EnigmaError::WrongSettingLength`] unless the string has
    ///   `num_rotors - 1` characters.
    /// - [`EnigmaError::SymbolOutOfRange`] for a character outside the
    ///   alphabet.
    pub fn set_rotors(&mut self, setting: &str) -> Result<(), EnigmaError> {
        self.require_inserted()?;
        let chars: Vec<char> = setting.chars().collect();
        if chars.len() != self.num_rotors - 1 {
            return Err(EnigmaError::WrongSettingLength {
                expected: self.num_rotors - 1,
                got: chars.len(),
            });
        }
        for (i, &ch) in chars.iter().enumerate() {
            if !self.alphabet.contains(ch) {
                return Err(EnigmaError::SymbolOutOfRange(ch));
            }
            if !self.slots[i + 1].reflects() {
                self.slots[i + 1].set_char(ch)?;
            }
        }
        Ok(())
    }

    /// Sets the ring settings from `ring`, whose characters apply to
    /// slots `1..num_rotors` left to right. Slot 0 is never ring-set.
    ///
    /// # Errors
    /// - [`EnigmaError::RotorsNotInserted`] before [`Self::insert_rotors`].
    /// - [`EnigmaError::WrongSettingLength`] unless the string has
    ///   `num_rotors - 1` characters.
    /// - [`EnigmaError::SymbolOutOfRange`] for a character outside the
    ///   alphabet, or [`EnigmaError::InvalidPosition`] if a reflecting
    ///   occupant of a later slot is given a non-zero ring.
    pub fn set_ring_setting(&mut self, ring: &str) -> Result<(), EnigmaError> {
        self.require_inserted()?;
        let chars: Vec<char> = ring.chars().collect();
        if chars.len() != self.num_rotors - 1 {
            return Err(EnigmaError::WrongSettingLength {
                expected: self.num_rotors - 1,
                got: chars.len(),
            });
        }
        for (i, &ch) in chars.iter().enumerate() {
            self.slots[i + 1].set_ring_char(ch)?;
        }
        Ok(())
    }

    /// Installs `plugboard` as the permutation applied before and after
    /// the rotor stack. Defaults to the identity until set.
    pub fn set_plugboard(&mut self, plugboard: Permutation) {
        self.plugboard = plugboard;
    }

    /// Steps the mechanism once, before a symbol is substituted.
    ///
    /// All decisions are driven by a snapshot of the notch states taken
    /// before any rotor moves, never by intermediate positions created
    /// within the same step:
    /// 1. The rightmost rotor always advances.
    /// 2. A rotating slot advances when the snapshot shows its right
    ///    neighbor at a notch; when that happens the neighbor advances
    ///    too (the double step), unless the snapshot shows the slot two
    ///    to its right at a notch.
    /// 3. The second-to-last slot advances when the snapshot shows the
    ///    last slot at a notch.
    fn step(&mut self) {
        let n = self.slots.len();
        let at_notch: Vec<bool> = self.slots.iter().map(Rotor::at_notch).collect();

        for i in 0..n.saturating_sub(2) {
            if self.slots[i].rotates() && at_notch[i + 1] {
                self.slots[i].advance();
                if self.slots[i + 1].rotates() && !at_notch[i + 2] {
                    self.slots[i + 1].advance();
                }
            }
        }
        if at_notch[n - 1] {
            self.slots[n - 2].advance();
        }
        self.slots[n - 1].advance();
    }

    /// Converts one alphabet index, stepping the machine first.
    ///
    /// The index passes through the plugboard, forward through every
    /// rotor from rightmost to the reflector, backward through every
    /// rotor except the reflector, then through the plugboard again.
    ///
    /// # Errors
    /// Returns [`EnigmaError::RotorsNotInserted`] before
    /// [`Self::insert_rotors`].
    pub fn convert_index(&mut self, c: usize) -> Result<usize, EnigmaError> {
        self.require_inserted()?;
        self.step();

        let mut res = self.plugboard.permute(c);
        for rotor in self.slots.iter().rev() {
            res = rotor.convert_forward(res);
        }
        for rotor in self.slots.iter().skip(1) {
            res = rotor.convert_backward(res)?;
        }
        Ok(self.plugboard.permute(res))
    }

    /// Converts a message symbol by symbol, updating rotor settings as
    /// it goes. Empty input yields empty output. State persists across
    /// calls, so converting the ciphertext on an identically re-set
    /// machine recovers the plaintext.
    ///
    /// A failed call leaves already-stepped rotors stepped; re-run the
    /// setup sequence before reusing the machine.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolOutOfRange`] for a message symbol
    /// outside the alphabet, or [`EnigmaError::RotorsNotInserted`]
    /// before [`Self::insert_rotors`].
    pub fn convert(&mut self, msg: &str) -> Result<String, EnigmaError> {
        let mut result = String::with_capacity(msg.len());
        for ch in msg.chars() {
            let c = self.alphabet.to_index(ch)?;
            let converted = self.convert_index(c)?;
            result.push(self.alphabet.to_symbol(converted)?);
        }
        Ok(result)
    }

    fn require_inserted(&self) -> Result<(), EnigmaError> {
        if self.slots.len() != self.num_rotors {
            return Err(EnigmaError::RotorsNotInserted);
        }
        Ok(())
    }
}

//! Historical rotor cipher machine engine.
//!
//! Simulates an ordered stack of rotors, each a fixed letter
//! substitution wired as a permutation, that mechanically advance
//! between characters and combine with a plugboard substitution to
//! encrypt and decrypt symbol streams. Reproduces the exact historical
//! stepping behavior, including the double-step anomaly.
//!
//! # Architecture
//!
//! ```text
//! Alphabet     (ordered symbol ↔ index bijection)
//!     ↑ referenced by
//! Permutation  (cycle-notation bijection over indices)
//!     ↑ wired into
//! Rotor        (setting + ring setting; reflector / fixed / moving)
//!     ↑ cloned from a RotorCatalog into slots
//! Machine      (stepping + plugboard + dual-pass conversion)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message with the historical naval rotors:
//!
//! ```
//! use enigma::{Alphabet, Machine, Permutation, Rotor, RotorCatalog};
//!
//! let alpha = Alphabet::upper();
//! let mut catalog = RotorCatalog::new();
//! catalog.add(Rotor::reflector("B", Permutation::new(
//!     "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)",
//!     &alpha,
//! )?)?)?;
//! catalog.add(Rotor::fixed("BETA", Permutation::new(
//!     "(ALBEVFCYODJWUGNMQTZSKPR) (HIX)", &alpha,
//! )?))?;
//! catalog.add(Rotor::moving("I", Permutation::new(
//!     "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)", &alpha,
//! )?, "Q")?)?;
//! catalog.add(Rotor::moving("III", Permutation::new(
//!     "(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)", &alpha,
//! )?, "V")?)?;
//! catalog.add(Rotor::moving("IV", Permutation::new(
//!     "(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)", &alpha,
//! )?, "J")?)?;
//!
//! let mut machine = Machine::new(alpha.clone(), 5, 3, catalog)?;
//! machine.insert_rotors(&["B", "BETA", "III", "IV", "I"])?;
//! machine.set_rotors("ABCD")?;
//! machine.set_plugboard(Permutation::new("(HQ) (EX) (IP) (TR) (BY)", &alpha)?);
//!
//! assert_eq!(machine.convert("FROM")?, "KGHX");
//!
//! // The machine is reciprocal: the same setup decrypts.
//! machine.insert_rotors(&["B", "BETA", "III", "IV", "I"])?;
//! machine.set_rotors("ABCD")?;
//! assert_eq!(machine.convert("KGHX")?, "FROM");
//! # Ok::<(), enigma::EnigmaError>(())
//! ```

#![deny(clippy::all)]

pub mod error;

mod alphabet;
mod machine;
mod permutation;
mod rotor;

pub use alphabet::Alphabet;
pub use error::EnigmaError;
pub use machine::Machine;
pub use permutation::Permutation;
pub use rotor::{Rotor, RotorCatalog};

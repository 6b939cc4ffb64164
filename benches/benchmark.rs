//! Benchmarks for the rotor machine.
//!
//! Measures machine setup (catalog build, rotor insertion, settings),
//! single-symbol conversion, and message throughput scaling across
//! message lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma::{Alphabet, Machine, Permutation, Rotor, RotorCatalog};

const REFLECTOR_B: &str =
    "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)";
const BETA: &str = "(ALBEVFCYODJWUGNMQTZSKPR) (HIX)";
const NAVAL_I: &str = "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)";
const NAVAL_III: &str = "(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)";
const NAVAL_IV: &str = "(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)";
const PLUGBOARD: &str = "(HQ) (EX) (IP) (TR) (BY)";

fn naval_catalog() -> RotorCatalog {
    let alpha = Alphabet::upper();
    let perm = |spec: &str| Permutation::new(spec, &alpha).unwrap();
    let mut catalog = RotorCatalog::new();
    catalog
        .add(Rotor::reflector("B", perm(REFLECTOR_B)).unwrap())
        .unwrap();
    catalog.add(Rotor::fixed("BETA", perm(BETA))).unwrap();
    catalog
        .add(Rotor::moving("I", perm(NAVAL_I), "Q").unwrap())
        .unwrap();
    catalog
        .add(Rotor::moving("III", perm(NAVAL_III), "V").unwrap())
        .unwrap();
    catalog
        .add(Rotor::moving("IV", perm(NAVAL_IV), "J").unwrap())
        .unwrap();
    catalog
}

fn setup_machine(catalog: &RotorCatalog) -> Machine {
    let mut machine = Machine::new(Alphabet::upper(), 5, 3, catalog.clone()).unwrap();
    machine
        .insert_rotors(&["B", "BETA", "III", "IV", "I"])
        .unwrap();
    machine.set_rotors("ABCD").unwrap();
    machine.set_plugboard(Permutation::new(PLUGBOARD, &Alphabet::upper()).unwrap());
    machine
}

/// Benchmarks the full setup path: cycle parsing for every catalog
/// wiring, machine construction, rotor insertion, and settings.
fn bench_setup(c: &mut Criterion) {
    c.bench_function("machine_setup", |b| {
        b.iter(|| {
            let catalog = naval_catalog();
            black_box(setup_machine(&catalog));
        });
    });
}

/// Benchmarks single-symbol conversion with the 5-slot/3-pawl naval
/// configuration. State advances naturally between iterations,
/// reflecting real streaming behavior.
fn bench_convert_symbol(c: &mut Criterion) {
    let catalog = naval_catalog();
    let mut machine = setup_machine(&catalog);

    c.bench_function("convert_symbol", |b| {
        b.iter(|| machine.convert_index(black_box(5)).unwrap());
    });
}

/// Benchmarks message conversion throughput across message lengths.
fn bench_convert_message_scaling(c: &mut Criterion) {
    let lengths: &[usize] = &[16, 256, 4096];
    let catalog = naval_catalog();

    let mut group = c.benchmark_group("convert_message");
    for &len in lengths {
        let message: String = ('A'..='Z').cycle().take(len).collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &message, |b, msg| {
            let mut machine = setup_machine(&catalog);
            b.iter(|| machine.convert(black_box(msg)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_setup,
    bench_convert_symbol,
    bench_convert_message_scaling,
);
criterion_main!(benches);

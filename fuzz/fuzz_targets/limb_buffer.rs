#![no_main]

use bigfact::limb::{Limb, LimbBuffer, RADIX};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

fuzz_target!(|factors: Vec<u32>| {
    let factors: Vec<Limb> = factors.into_iter().take(32).map(|f| f % RADIX).collect();
    let mut buffer = LimbBuffer::with_capacity(factors.len() + 1);
    let mut expected = BigUint::from(1u32);
    for &factor in &factors {
        buffer.imul_small(factor);
        expected *= factor;
    }
    assert_eq!(buffer.to_decimal_string(), expected.to_string());
});

#![no_main]

use bigfact::Algorithm;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|n: u16| {
    let n = i64::from(n % 300);
    let expected = bigfact::long_multiplication(n).unwrap();
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.compute(n).unwrap(), expected, "{}({})", algorithm, n);
    }
});

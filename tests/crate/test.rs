pub use bigfact::*;

#[test]
fn without_parallel() {
    let report = compare(30, &Algorithm::ALL, Mode::Parallel).unwrap();
    assert_eq!(report.value(), "265252859812191058636308480000000");
}

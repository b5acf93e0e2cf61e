//! Cross-variant equivalence and harness behavior, end to end.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use reduce_kernels::{
    Clock, CombineOp, CpeReport, Element, Harness, HarnessConfig, NumVec, ReduceError,
    ReduceResult, Variant,
};

const SEQUENTIAL: [Variant; 4] = [
    Variant::Baseline,
    Variant::CachedLen,
    Variant::RawSlice,
    Variant::LocalAcc,
];

const UNROLLED: [Variant; 3] = [Variant::Unroll2x1, Variant::Unroll2x2, Variant::Unroll2x1a];

fn vec_from<T: Element>(values: &[T]) -> NumVec<T> {
    let mut v = NumVec::new(values.len()).unwrap();
    v.as_mut_slice().copy_from_slice(values);
    v
}

fn fold<T: Element>(values: &[T], op: CombineOp) -> T {
    let mut acc = op.identity();
    for &x in values {
        acc = op.apply(acc, x);
    }
    acc
}

#[test]
fn integer_variants_are_bitwise_equal_across_lengths() {
    let mut rng = StdRng::seed_from_u64(101);
    for len in (0..=17).chain([100, 1001]) {
        let mut v = NumVec::<i32>::new(len).unwrap();
        v.fill_random_with(&mut rng, 0, 99);
        for op in CombineOp::ALL {
            let expected = fold(v.as_slice(), op);
            for variant in Variant::ALL {
                assert_eq!(variant.run(&v, op), expected, "{variant} {op} len={len}");
            }
        }
    }
}

#[test]
fn i64_variants_agree_under_wrapping_products() {
    let mut rng = StdRng::seed_from_u64(313);
    let mut v = NumVec::<i64>::new(257).unwrap();
    v.fill_random_with(&mut rng, 2, 1_000_000);
    let expected = fold(v.as_slice(), CombineOp::Mul);
    for variant in Variant::ALL {
        assert_eq!(variant.run(&v, CombineOp::Mul), expected, "{variant}");
    }
}

#[test]
fn sequential_float_variants_are_bitwise_identical() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut v = NumVec::<f32>::new(1000).unwrap();
    v.fill_random_with(&mut rng, 0.0, 100.0);
    for op in CombineOp::ALL {
        let reference = Variant::Baseline.run(&v, op);
        for variant in SEQUENTIAL {
            assert_eq!(
                variant.run(&v, op).to_bits(),
                reference.to_bits(),
                "{variant} {op}"
            );
        }
    }
}

#[test]
fn unrolled_float_sums_differ_only_by_rounding() {
    let mut rng = StdRng::seed_from_u64(29);
    let mut v = NumVec::<f32>::new(1000).unwrap();
    v.fill_random_with(&mut rng, 0.0, 100.0);
    let reference = Variant::Baseline.run(&v, CombineOp::Add);
    for variant in UNROLLED {
        let got = variant.run(&v, CombineOp::Add);
        let rel = ((got - reference) / reference).abs();
        assert!(rel < 1e-3, "{variant}: {got} vs {reference}, rel={rel}");
    }
}

#[test]
fn unrolled_float_products_differ_only_by_rounding() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut v = NumVec::<f32>::new(1000).unwrap();
    // Values near 1.0 keep the product well inside f32 range.
    v.fill_random_with(&mut rng, 0.9, 1.1);
    let reference = Variant::Baseline.run(&v, CombineOp::Mul);
    assert!(reference.is_finite() && reference != 0.0);
    for variant in UNROLLED {
        let got = variant.run(&v, CombineOp::Mul);
        let rel = ((got - reference) / reference).abs();
        assert!(rel < 1e-3, "{variant}: {got} vs {reference}, rel={rel}");
    }
}

#[test]
fn f64_unrolled_sums_are_tighter() {
    let mut rng = StdRng::seed_from_u64(37);
    let mut v = NumVec::<f64>::new(4096).unwrap();
    v.fill_random_with(&mut rng, 0.0, 100.0);
    let reference = Variant::Baseline.run(&v, CombineOp::Add);
    for variant in UNROLLED {
        let got = variant.run(&v, CombineOp::Add);
        let rel = ((got - reference) / reference).abs();
        assert!(rel < 1e-10, "{variant}: rel={rel}");
    }
}

#[test]
fn reference_vector_anchors() {
    let v = vec_from(&[1, 2, 3, 4, 5]);
    for variant in Variant::ALL {
        assert_eq!(variant.run(&v, CombineOp::Add), 15);
        assert_eq!(variant.run(&v, CombineOp::Mul), 120);
    }
    let empty = NumVec::<i32>::new(0).unwrap();
    for variant in Variant::ALL {
        assert_eq!(variant.run(&empty, CombineOp::Add), 0);
        assert_eq!(variant.run(&empty, CombineOp::Mul), 1);
    }
}

#[test]
fn repeated_measurement_is_idempotent_on_results() {
    let mut rng = StdRng::seed_from_u64(41);
    let mut v = NumVec::<i32>::new(512).unwrap();
    v.fill_random_with(&mut rng, 0, 99);
    let contents: Vec<i32> = v.as_slice().to_vec();

    for repeat in [1, 2, 8] {
        let harness = Harness::new(HarnessConfig {
            repeat,
            ..Default::default()
        });
        let m = harness.measure(&v, Variant::Unroll2x1a, CombineOp::Add).unwrap();
        assert_eq!(m.result, fold(&contents, CombineOp::Add));
        assert!(m.cpe.is_finite() && m.cpe >= 0.0);
    }
    assert_eq!(contents, v.as_slice());
}

#[test]
fn clock_failure_skips_one_combination_and_run_continues() {
    struct BrokenClock;

    impl Clock for BrokenClock {
        fn now(&self) -> ReduceResult<Duration> {
            Err(ReduceError::ClockUnavailable("simulated".into()))
        }
    }

    let broken = Harness::with_clock(HarnessConfig::default(), BrokenClock);
    let healthy = Harness::new(HarnessConfig::default());
    let v = vec_from(&[1, 2, 3]);
    let mut report = CpeReport::new();

    // The driver path: a TimingUnavailable combination is recorded as
    // skipped, everything else still measures.
    match broken.measure(&v, Variant::Baseline, CombineOp::Add) {
        Err(err @ ReduceError::ClockUnavailable(_)) => {
            report.record_skip(Variant::Baseline, CombineOp::Add, i32::NAME, err.to_string());
        }
        other => panic!("expected ClockUnavailable, got {other:?}"),
    }
    let m = healthy.measure(&v, Variant::CachedLen, CombineOp::Add).unwrap();
    report.record(Variant::CachedLen, CombineOp::Add, i32::NAME, m.cpe);

    assert_eq!(report.skipped().len(), 1);
    assert_eq!(report.entries().len(), 1);
    let summary = report.summary_string(healthy.config(), v.len());
    assert!(summary.contains("skipped: monotonic clock unavailable: simulated"));
}

#[test]
fn configuration_errors_surface_immediately() {
    let harness = Harness::new(HarnessConfig {
        repeat: 0,
        ..Default::default()
    });
    let v = vec_from(&[1, 2, 3]);
    assert!(matches!(
        harness.measure(&v, Variant::Baseline, CombineOp::Add),
        Err(ReduceError::InvalidRepeatCount)
    ));
    assert!(matches!(
        CombineOp::from_symbol('/'),
        Err(ReduceError::UnknownOperation('/'))
    ));
}

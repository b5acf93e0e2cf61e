//! CPE driver: measures every kernel under every operation and element type
//! against one freshly filled million-element vector per type, then prints
//! the summary table.

use std::process::ExitCode;

use log::warn;

use reduce_kernels::{
    CombineOp, CpeReport, Element, Harness, HarnessConfig, NumVec, ReduceError, Variant,
};

const VEC_LEN: usize = 1_000_000;

fn run_suite<T: Element>(harness: &Harness, v: &NumVec<T>, report: &mut CpeReport) {
    for variant in Variant::ALL {
        for op in CombineOp::ALL {
            match harness.measure(v, variant, op) {
                Ok(m) => {
                    println!(
                        "{:<14} {:<4} {:<4} CPE: {:.2} cycles/element",
                        variant.name(),
                        op.label(),
                        T::NAME,
                        m.cpe
                    );
                    report.record(variant, op, T::NAME, m.cpe);
                }
                Err(err @ ReduceError::ClockUnavailable(_)) => {
                    warn!(
                        "skipping {}/{}/{}: {err}",
                        variant.name(),
                        op.label(),
                        T::NAME
                    );
                    report.record_skip(variant, op, T::NAME, err.to_string());
                }
                Err(err) => {
                    warn!(
                        "measurement failed for {}/{}/{}: {err}",
                        variant.name(),
                        op.label(),
                        T::NAME
                    );
                    report.record_skip(variant, op, T::NAME, err.to_string());
                }
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    println!("combine kernels under test:");
    for variant in Variant::ALL {
        println!("  {:<14} {}", variant.name(), variant.strategy());
    }
    println!();

    let harness = Harness::new(HarnessConfig::default());

    let mut v_int = match NumVec::<i32>::new(VEC_LEN) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("integer vector setup failed: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut v_float = match NumVec::<f32>::new(VEC_LEN) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("float vector setup failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    v_int.fill_random(0, 99);
    v_float.fill_random(0.0, 100.0);

    let mut report = CpeReport::new();
    run_suite(&harness, &v_int, &mut report);
    run_suite(&harness, &v_float, &mut report);

    print!("{}", report.summary_string(harness.config(), VEC_LEN));
    ExitCode::SUCCESS
}

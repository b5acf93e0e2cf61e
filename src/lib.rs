//! reduce-kernels: scalar loop-optimization study kernels for vector
//! reduction, with a cycles-per-element harness.
//!
//! The crate pairs a fixed-length numeric vector with seven reduction
//! kernels that share one mathematical contract (fold add or multiply over
//! the elements in index order) and differ only in loop strategy: accessor
//! calls per element, cached length, raw slice traversal, local
//! accumulation, and three flavors of 2-way unrolling. A harness times each
//! kernel and converts elapsed wall time to cycles per element using a
//! configured CPU frequency.
//!
//! # Quick Start
//!
//! ```ignore
//! use reduce_kernels::{CombineOp, Harness, HarnessConfig, NumVec, Variant};
//!
//! let mut v = NumVec::<f32>::new(1_000_000)?;
//! v.fill_random(0.0, 100.0);
//!
//! let harness = Harness::new(HarnessConfig::default());
//! let m = harness.measure(&v, Variant::Unroll2x2, CombineOp::Add)?;
//! println!("CPE: {:.2}", m.cpe);
//! ```

pub mod element;
pub mod error;
pub mod kernels;
pub mod ops;
pub mod profiling;
pub mod vector;

pub use element::Element;
pub use error::{ReduceError, ReduceResult};
pub use kernels::Variant;
pub use ops::CombineOp;
pub use profiling::report::{CpeRecord, CpeReport, SkippedRecord};
pub use profiling::timer::{Clock, MonotonicClock};
pub use profiling::{Harness, HarnessConfig, Measurement};
pub use vector::NumVec;

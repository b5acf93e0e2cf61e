//! The combine kernel family: seven reductions with one contract.
//!
//! Every kernel folds the operation's identity with all vector elements in
//! index order and differs only in loop strategy:
//!
//! - [`baseline`]: length re-read and element accessor call per iteration
//! - [`cached_len`]: length hoisted out of the loop
//! - [`raw_slice`]: element accessor replaced by direct slice indexing
//! - [`local_acc`]: destination write moved out of the loop
//! - [`unroll_2x1`]: stride-2 unroll, one sequential accumulator
//! - [`unroll_2x2`]: stride-2 unroll, two independent accumulators
//! - [`unroll_2x1a`]: stride-2 unroll, pairs pre-combined before folding
//!
//! Integer results are bitwise identical across all seven. The unrolled
//! kernels reassociate floating-point operations, so their float results may
//! differ from the sequential kernels by rounding error. That reassociation
//! is the point of the study; do not normalize it away.

use crate::element::Element;
use crate::ops::CombineOp;
use crate::vector::NumVec;

/// Reads the length through the accessor on every iteration and every
/// element through the bounds-checked accessor, accumulating straight into
/// `*dest`.
pub fn baseline<T: Element>(v: &NumVec<T>, op: CombineOp, dest: &mut T) {
    *dest = op.identity();
    let mut i = 0;
    // v.len() is intentionally re-evaluated each pass.
    while i < v.len() {
        if let Some(value) = v.get(i) {
            *dest = op.apply(*dest, value);
        }
        i += 1;
    }
}

/// As [`baseline`], with the length read once before the loop.
pub fn cached_len<T: Element>(v: &NumVec<T>, op: CombineOp, dest: &mut T) {
    *dest = op.identity();
    let len = v.len();
    let mut i = 0;
    while i < len {
        if let Some(value) = v.get(i) {
            *dest = op.apply(*dest, value);
        }
        i += 1;
    }
}

/// As [`cached_len`], with the per-element accessor call replaced by direct
/// indexing into the raw view. Still writes `*dest` every step.
pub fn raw_slice<T: Element>(v: &NumVec<T>, op: CombineOp, dest: &mut T) {
    *dest = op.identity();
    let len = v.len();
    let data = v.as_slice();
    let mut i = 0;
    while i < len {
        *dest = op.apply(*dest, data[i]);
        i += 1;
    }
}

/// As [`raw_slice`], accumulating in a local and writing `*dest` once at the
/// end.
pub fn local_acc<T: Element>(v: &NumVec<T>, op: CombineOp, dest: &mut T) {
    let data = v.as_slice();
    let len = data.len();
    let mut acc: T = op.identity();
    let mut i = 0;
    while i < len {
        acc = op.apply(acc, data[i]);
        i += 1;
    }
    *dest = acc;
}

/// 2x1 unroll: combines element pairs sequentially into one accumulator,
/// `acc = (acc op e[i]) op e[i+1]`, with a scalar tail for an odd final
/// element. Exactly `len - len % 2` elements go through the paired loop.
pub fn unroll_2x1<T: Element>(v: &NumVec<T>, op: CombineOp, dest: &mut T) {
    let data = v.as_slice();
    let len = data.len();
    let limit = len - len % 2;
    let mut acc: T = op.identity();
    let mut i = 0;
    while i < limit {
        acc = op.apply(op.apply(acc, data[i]), data[i + 1]);
        i += 2;
    }
    while i < len {
        acc = op.apply(acc, data[i]);
        i += 1;
    }
    *dest = acc;
}

/// 2x2 unroll: one accumulator per index parity, merged by `op` after the
/// loop. Same pairing and tail bounds as [`unroll_2x1`].
pub fn unroll_2x2<T: Element>(v: &NumVec<T>, op: CombineOp, dest: &mut T) {
    let data = v.as_slice();
    let len = data.len();
    let limit = len - len % 2;
    let mut acc0: T = op.identity();
    let mut acc1: T = op.identity();
    let mut i = 0;
    while i < limit {
        acc0 = op.apply(acc0, data[i]);
        acc1 = op.apply(acc1, data[i + 1]);
        i += 2;
    }
    while i < len {
        acc0 = op.apply(acc0, data[i]);
        i += 1;
    }
    *dest = op.apply(acc0, acc1);
}

/// 2x1a unroll: pre-combines each pair, then folds the pair result,
/// `acc = acc op (e[i] op e[i+1])`. Same pairing and tail bounds as
/// [`unroll_2x1`].
pub fn unroll_2x1a<T: Element>(v: &NumVec<T>, op: CombineOp, dest: &mut T) {
    let data = v.as_slice();
    let len = data.len();
    let limit = len - len % 2;
    let mut acc: T = op.identity();
    let mut i = 0;
    while i < limit {
        acc = op.apply(acc, op.apply(data[i], data[i + 1]));
        i += 2;
    }
    while i < len {
        acc = op.apply(acc, data[i]);
        i += 1;
    }
    *dest = acc;
}

/// Kernel selector for enum-based dispatch. Monomorphized per element type,
/// so selection costs one match per call, not per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Baseline,
    CachedLen,
    RawSlice,
    LocalAcc,
    Unroll2x1,
    Unroll2x2,
    Unroll2x1a,
}

impl Variant {
    pub const ALL: [Variant; 7] = [
        Variant::Baseline,
        Variant::CachedLen,
        Variant::RawSlice,
        Variant::LocalAcc,
        Variant::Unroll2x1,
        Variant::Unroll2x2,
        Variant::Unroll2x1a,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Baseline => "baseline",
            Variant::CachedLen => "cached-len",
            Variant::RawSlice => "raw-slice",
            Variant::LocalAcc => "local-acc",
            Variant::Unroll2x1 => "unroll-2x1",
            Variant::Unroll2x2 => "unroll-2x2",
            Variant::Unroll2x1a => "unroll-2x1a",
        }
    }

    /// One-line description of the loop strategy.
    pub fn strategy(self) -> &'static str {
        match self {
            Variant::Baseline => "length and element accessor call per iteration",
            Variant::CachedLen => "length cached before the loop",
            Variant::RawSlice => "direct slice indexing",
            Variant::LocalAcc => "local accumulator, single destination write",
            Variant::Unroll2x1 => "2x1 unroll, sequential pair folding",
            Variant::Unroll2x2 => "2x2 unroll, two independent accumulators",
            Variant::Unroll2x1a => "2x1a unroll, pairs pre-combined",
        }
    }

    /// Runs the selected kernel against `dest`.
    #[inline]
    pub fn run_into<T: Element>(self, v: &NumVec<T>, op: CombineOp, dest: &mut T) {
        match self {
            Variant::Baseline => baseline(v, op, dest),
            Variant::CachedLen => cached_len(v, op, dest),
            Variant::RawSlice => raw_slice(v, op, dest),
            Variant::LocalAcc => local_acc(v, op, dest),
            Variant::Unroll2x1 => unroll_2x1(v, op, dest),
            Variant::Unroll2x2 => unroll_2x2(v, op, dest),
            Variant::Unroll2x1a => unroll_2x1a(v, op, dest),
        }
    }

    /// Runs the selected kernel and returns the reduction result.
    pub fn run<T: Element>(self, v: &NumVec<T>, op: CombineOp) -> T {
        let mut dest = op.identity();
        self.run_into(v, op, &mut dest);
        dest
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

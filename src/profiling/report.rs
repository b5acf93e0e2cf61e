//! Collection and formatting of CPE results.

use crate::kernels::Variant;
use crate::ops::CombineOp;
use crate::profiling::HarnessConfig;

/// CPE for one kernel under one operation and element type.
#[derive(Debug, Clone)]
pub struct CpeRecord {
    pub variant: Variant,
    pub op: CombineOp,
    pub dtype: &'static str,
    pub cpe: f64,
}

/// A combination that produced no CPE, with the reason it was skipped.
#[derive(Debug, Clone)]
pub struct SkippedRecord {
    pub variant: Variant,
    pub op: CombineOp,
    pub dtype: &'static str,
    pub reason: String,
}

/// Accumulates per-combination results for the run summary.
#[derive(Debug, Clone, Default)]
pub struct CpeReport {
    entries: Vec<CpeRecord>,
    skipped: Vec<SkippedRecord>,
}

impl CpeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, variant: Variant, op: CombineOp, dtype: &'static str, cpe: f64) {
        self.entries.push(CpeRecord {
            variant,
            op,
            dtype,
            cpe,
        });
    }

    pub fn record_skip(
        &mut self,
        variant: Variant,
        op: CombineOp,
        dtype: &'static str,
        reason: String,
    ) {
        self.skipped.push(SkippedRecord {
            variant,
            op,
            dtype,
            reason,
        });
    }

    pub fn entries(&self) -> &[CpeRecord] {
        &self.entries
    }

    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    /// Formats the summary table.
    pub fn summary_string(&self, config: &HarnessConfig, vec_len: usize) -> String {
        let mut s = String::with_capacity(2048);
        s.push_str(&format!(
            "\n{:=<64}\n combine CPE summary  |  clock: {:.2} GHz  |  n={}  repeat={}\n{:=<64}\n",
            "",
            config.cpu_freq_hz / 1e9,
            vec_len,
            config.repeat,
            ""
        ));
        s.push_str(&format!(
            " {:<14} {:<6} {:<6} {:>10}\n{:-<64}\n",
            "Kernel", "Op", "Type", "CPE", ""
        ));

        for e in &self.entries {
            s.push_str(&format!(
                " {:<14} {:<6} {:<6} {:>10.2}\n",
                e.variant.name(),
                e.op.label(),
                e.dtype,
                e.cpe,
            ));
        }

        for skip in &self.skipped {
            s.push_str(&format!(
                " {:<14} {:<6} {:<6}    skipped: {}\n",
                skip.variant.name(),
                skip.op.label(),
                skip.dtype,
                skip.reason,
            ));
        }

        s.push_str(&format!("{:=<64}\n", ""));
        s
    }
}

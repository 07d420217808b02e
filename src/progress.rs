// src/progress.rs
/// Operator-facing progress for a run (distinct from `tracing` diagnostics).
/// Frontends implement what they want to show; everything defaults to no-op.
pub trait Progress {
    /// A new group of steps starts (AXL lookups, then the admin site).
    fn section(&mut self) {}

    /// A pipeline step is starting (e.g. "Retrieving AXL version").
    fn step(&mut self, _label: &str) {}

    /// The current step finished; `outcome` is what it produced.
    fn step_done(&mut self, _outcome: &str) {}

    /// Parameter scraping is about to walk `total` services.
    fn begin(&mut self, _total: usize) {}

    fn service_started(&mut self, _name: &str) {}

    /// One service page was parsed into `count` parameters.
    fn service_done(&mut self, _name: &str, _count: usize) {}

    /// All services done.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

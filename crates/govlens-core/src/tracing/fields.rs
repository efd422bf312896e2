//! Span names shared across govlens subsystems, so log queries can select
//! one phase of a run regardless of which crate emitted it.

/// Snapshot source: reading and parsing one discovery document.
pub const SNAPSHOT_LOAD: &str = "snapshot_load";

/// Analysis: building the inversion graph for one snapshot.
pub const INVERSION_BUILD: &str = "inversion_build";

/// Analysis: rendering one permission template.
pub const TEMPLATE_RENDER: &str = "template_render";

/// Every span name above.
pub const ALL_SPANS: &[&str] = &[SNAPSHOT_LOAD, INVERSION_BUILD, TEMPLATE_RENDER];

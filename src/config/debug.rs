//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit how many events each category loses to the marker cap.
    pub print_capped_events: bool,
    /// Emit per-series gap counts after normalization.
    pub print_normalizer_gaps: bool,
    /// Emit timing and size of every rebuilt chart bundle.
    pub print_bundle_stats: bool,
    /// Emit refresh scheduling (start, superseded, applied).
    pub print_refresh_events: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_capped_events: false,
    print_normalizer_gaps: false,
    print_bundle_stats: false,
    print_refresh_events: false,
    print_shutdown: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_are_off_by_default() {
        let flags = [
            DEBUG_FLAGS.print_capped_events,
            DEBUG_FLAGS.print_normalizer_gaps,
            DEBUG_FLAGS.print_bundle_stats,
            DEBUG_FLAGS.print_refresh_events,
            DEBUG_FLAGS.print_shutdown,
        ];
        assert!(flags.iter().all(|on| !on));
    }
}

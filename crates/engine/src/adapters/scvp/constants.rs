// Logging target for exchange diagnostics, so hosts can filter wire dumps
// independently of the decision log.
pub const DIAGNOSTICS_TARGET: &str = "scvp_trust_engine::exchange";

// Hex dumps above this many bytes are truncated in the diagnostic record.
pub const MAX_DIAGNOSTIC_BYTES: usize = 64 * 1024; // 64 KiB

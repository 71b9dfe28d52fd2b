use serde::{Deserialize, Serialize};

/// Stage of the scan-to-recipes pipeline.
///
/// Design principle: this is a pure stage type derived from the session
/// state. Runtime behaviors like dispatching network calls are handled by
/// the application layer (ps-app).
///
/// Stage order:
///
/// ```text
/// Empty
///  │ begin_scan
///  ▼
/// Scanning ──→ Scanned (edits in place)
///               │ begin_generate
///               ▼
///              Generating ──→ Generated
///
/// Any stage ──reset──→ Empty
/// A new scan from Scanned/Generated re-enters Scanning.
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineStage {
    /// No scan session exists.
    Empty,

    /// A scan call is in flight; any prior session is kept until it lands.
    Scanning,

    /// A scan session exists and is being reviewed/edited.
    Scanned,

    /// A generation call is in flight.
    Generating,

    /// A recipe set exists for the current session.
    Generated,
}

impl PipelineStage {
    /// Whether a network call is in flight (used by callers to disable input).
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Scanning | Self::Generating)
    }

    /// Whether a scan session currently exists.
    pub fn has_session(self) -> bool {
        matches!(self, Self::Scanned | Self::Generating | Self::Generated)
    }
}

impl Default for PipelineStage {
    fn default() -> Self {
        Self::Empty
    }
}

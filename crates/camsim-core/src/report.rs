//! Warning report channel
//!
//! Data-quality problems found during resolution never abort the pass;
//! they are recorded here and forwarded to the `tracing` subscriber.
//! Keeping the typed record lets callers (and tests) inspect exactly
//! what a pass complained about.

use std::fmt;

/// A recoverable data-quality issue found during resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// An operation has no tool assigned (cached tool number 0)
    MissingTool {
        /// Owning part name
        part: String,
        /// Operation name
        op: String,
    },
    /// A resolved tool has zero diameter; simulation results will be wrong
    ZeroDiameter {
        /// Owning part name
        part: String,
        /// Operation name
        op: String,
        /// Tool-table index
        index: u32,
    },
    /// A conical library tool declared no usable vee angle; 45 degrees
    /// was substituted
    DefaultedVeeAngle {
        /// Tool display name
        tool: String,
        /// Tool-table index
        index: u32,
    },
    /// Two operations resolved differing tools for the same index; the
    /// later one was kept
    ToolConflict {
        /// Part owning the later operation
        part: String,
        /// The later operation's name
        op: String,
        /// Contested tool-table index
        index: u32,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTool { part, op } => {
                write!(f, "{}/{}: no tool assigned, operation skipped", part, op)
            }
            Self::ZeroDiameter { part, op, index } => {
                write!(
                    f,
                    "{}/{}: tool {} has zero diameter, simulation results will be wrong",
                    part, op, index
                )
            }
            Self::DefaultedVeeAngle { tool, index } => {
                write!(
                    f,
                    "tool {} '{}': vee angle undefined, assuming 45 degrees",
                    index, tool
                )
            }
            Self::ToolConflict { part, op, index } => {
                write!(
                    f,
                    "{}/{}: conflicting definitions for tool {}, keeping the later one",
                    part, op, index
                )
            }
        }
    }
}

/// Ordered record of the warnings one resolution pass produced
#[derive(Debug, Clone, Default)]
pub struct Report {
    warnings: Vec<Warning>,
}

impl Report {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and forward it to the log
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// The recorded warnings, in emission order
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Number of recorded warnings
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Whether the pass completed without warnings
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

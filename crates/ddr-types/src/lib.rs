pub mod types;

pub use types::{
    ConfidenceScores, DiagnosticReport, Finding, ReportRun, SeverityAssessment, SeverityLevel, Tag,
    NOT_AVAILABLE,
};

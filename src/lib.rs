// Recon Desk Library - Exception Report Dashboard Client
// This exposes the core components for testing and integration

pub mod auth;
pub mod backend;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod metrics;
pub mod reports;
pub mod status;
pub mod telemetry;

// Re-export key types for easy access
pub use auth::{AuthClient, AuthError, Session};
pub use backend::{BackendClient, BackendError, TaskQuery};
pub use backend::types::{ImportFileResult, ImportSummary, Task, TaskNote, User};
pub use config::{config, init_config, ReconDeskConfig};
pub use dashboard::{DashboardSnapshot, ReportCard};
pub use metrics::{aggregate, task_timings, DurationAverage, MetricsReporter, ReportMetrics};
pub use reports::ReportKind;
pub use status::{classify, ResolutionOrigin, TaskStatus, AUTO_RESOLVED_MARKER};
pub use telemetry::init_telemetry;

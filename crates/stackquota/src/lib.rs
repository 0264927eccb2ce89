//! stackquota
//!
//! Service quota checks a deployment tool runs before provisioning.
//! The host hands over the diff records of a planned deployment; this crate
//! classifies them by resource kind, asks a provider for the quota and the
//! current usage of each kind that has pending creations, and reports every
//! kind whose quota would be exceeded.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │             host deployment pipeline             │
//! └─────────────────┬───────────────────────────────┘
//!                   │ trait QuotaChecker
//! ┌─────────────────▼───────────────────────────────┐
//! │                  stackquota                      │
//! │  ┌──────────────┐  ┌──────────────────────────┐ │
//! │  │  Classifier  │  │  QuotaDispatcher          │ │
//! │  └──────────────┘  │   kind -> KindChecker     │ │
//! │                    └────────────┬─────────────┘ │
//! └─────────────────────────────────┼───────────────┘
//!                                   │ trait QuotaSource
//!                           ┌───────▼───────┐
//!                           │ stackquota-aws │
//!                           └───────────────┘
//! ```

pub mod diff;
pub mod dispatcher;
pub mod error;
pub mod kind;
pub mod logger;
pub mod options;
pub mod quota;

// Re-exports
pub use diff::{ChangeType, DiffRecord, DiffSummary, IacFormat};
pub use dispatcher::{QuotaChecker, QuotaDispatcher};
pub use error::{QUOTA_LIMIT_REACHED, QuotaError, QuotaViolation, Result};
pub use kind::{ResourceKind, classify, classify_with_format};
pub use logger::{NoopLogger, QuotaLogger, SharedLogger, TracingLogger, default_logger};
pub use options::CheckOptions;
pub use quota::{KindChecker, QuotaCheck, QuotaProfile, QuotaSession, QuotaSnapshot, QuotaSource};

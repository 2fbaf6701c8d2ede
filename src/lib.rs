//! Publink - publish symlink maintenance for pipeline tracking events
//!
//! Publink reacts to "published file status changed" events from a pipeline
//! tracking service. It resolves the changed record, filters by project,
//! dispatches to a type-specific handler, and for Motion Builder FBX publishes
//! repoints the `current` symlink in the publish directory at the version
//! directory that was just published.
//!
//! The tracking service and the event dispatcher are collaborators, modeled
//! as the [`tracking::TrackingClient`] and [`log::Logger`] ports.

pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod link;
pub mod log;
pub mod models;
pub mod parser;
pub mod tracking;

// Re-exports for convenience
pub use config::Config;
pub use error::{PublinkError, PublinkResult};
pub use event::{handle_status_change, registration, Registration};
pub use handler::{handler_for, process, FbxHandler, Handler, FBX_TYPE_NAME};
pub use log::{Logger, NoopLogger, RecordingLogger, TracingLogger};
pub use models::{Project, PublishedFile, StatusChangeEvent};
pub use parser::{parse_publish_path, PublishPath};
pub use tracking::{Filter, TrackingClient};

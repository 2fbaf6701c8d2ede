//! Handler lifecycle and registry
//!
//! A handler owns one published file record for its lifetime and is driven
//! once through validate → execute → finalize by [`process`], then discarded.
//! [`handler_for`] maps the record's published-file-type name to a concrete
//! handler; unknown names yield `None`, which callers treat as an ordinary
//! "nothing to do here".

pub mod fbx;

pub use fbx::FbxHandler;

use crate::error::PublinkResult;
use crate::log::Logger;
use crate::models::PublishedFile;

/// Published-file-type name handled by [`FbxHandler`]
pub const FBX_TYPE_NAME: &str = "Motion Builder FBX";

/// Lifecycle capability implemented by every concrete handler
pub trait Handler {
    /// Logger the failure boundary reports through
    fn logger(&self) -> &dyn Logger;

    /// An opportunity to validate before execution
    ///
    /// Concrete handlers run every check and log a descriptive error per
    /// failure; one failed check does not stop the others from running.
    /// Returns `Ok(true)` by default.
    fn validate(&mut self) -> PublinkResult<bool> {
        Ok(true)
    }

    /// Primary execution method
    fn execute(&mut self) -> PublinkResult<()>;

    /// An opportunity to do clean-up or any post-execution task
    fn finalize(&mut self) -> PublinkResult<()> {
        Ok(())
    }
}

/// Drive a handler through its full lifecycle
///
/// Runs validate, and only when it passes, execute then finalize. Any error
/// from the three stages is logged through the handler's logger and
/// swallowed: a broken handler degrades to "logged and ignored" and never
/// takes the event dispatcher down with it.
pub fn process(handler: &mut dyn Handler) {
    if let Err(e) = run_lifecycle(handler) {
        handler.logger().error(&format!("handler failed: {e}"));
    }
}

fn run_lifecycle(handler: &mut dyn Handler) -> PublinkResult<()> {
    if !handler.validate()? {
        return Ok(());
    }
    handler.execute()?;
    handler.finalize()
}

/// Construct the handler registered for the record's published-file-type
/// name, bound to that record and `logger`
pub fn handler_for<'a>(
    record: &PublishedFile,
    logger: &'a dyn Logger,
) -> Option<Box<dyn Handler + 'a>> {
    match record.type_name()? {
        FBX_TYPE_NAME => Some(Box::new(FbxHandler::new(record.clone(), logger))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PublinkError;
    use crate::log::{Level, RecordingLogger};
    use crate::models::EntityRef;
    use serde_json::json;

    fn record_with_type(name: Option<&str>) -> PublishedFile {
        let mut record: PublishedFile = serde_json::from_value(json!({ "id": 1 })).unwrap();
        record.file_type = name.map(|name| EntityRef {
            id: 7,
            name: name.to_string(),
        });
        record
    }

    struct ScriptedHandler {
        logger: RecordingLogger,
        valid: bool,
        execute_error: bool,
        executed: bool,
        finalized: bool,
    }

    impl ScriptedHandler {
        fn new(logger: RecordingLogger) -> Self {
            Self {
                logger,
                valid: true,
                execute_error: false,
                executed: false,
                finalized: false,
            }
        }
    }

    impl Handler for ScriptedHandler {
        fn logger(&self) -> &dyn Logger {
            &self.logger
        }

        fn validate(&mut self) -> PublinkResult<bool> {
            Ok(self.valid)
        }

        fn execute(&mut self) -> PublinkResult<()> {
            self.executed = true;
            if self.execute_error {
                return Err(PublinkError::Tracking {
                    message: "boom".to_string(),
                });
            }
            Ok(())
        }

        fn finalize(&mut self) -> PublinkResult<()> {
            self.finalized = true;
            Ok(())
        }
    }

    #[test]
    fn test_process_runs_execute_and_finalize() {
        let logger = RecordingLogger::new();
        let mut handler = ScriptedHandler::new(logger.clone());

        process(&mut handler);

        assert!(handler.executed);
        assert!(handler.finalized);
        assert!(logger.is_empty());
    }

    #[test]
    fn test_process_skips_execute_when_rejected() {
        let logger = RecordingLogger::new();
        let mut handler = ScriptedHandler::new(logger.clone());
        handler.valid = false;

        process(&mut handler);

        assert!(!handler.executed);
        assert!(!handler.finalized);
    }

    #[test]
    fn test_process_logs_and_swallows_execute_error() {
        let logger = RecordingLogger::new();
        let mut handler = ScriptedHandler::new(logger.clone());
        handler.execute_error = true;

        process(&mut handler);

        assert!(handler.executed);
        assert!(!handler.finalized);
        let errors = logger.messages_at(Level::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("handler failed"));
        assert!(errors[0].contains("boom"));
    }

    #[test]
    fn test_registry_returns_fbx_handler() {
        let logger = RecordingLogger::new();
        let record = record_with_type(Some(FBX_TYPE_NAME));

        assert!(handler_for(&record, &logger).is_some());
    }

    #[test]
    fn test_registry_unknown_type_is_none() {
        let logger = RecordingLogger::new();

        assert!(handler_for(&record_with_type(Some("Alembic Cache")), &logger).is_none());
        assert!(handler_for(&record_with_type(None), &logger).is_none());
    }

    #[test]
    fn test_registry_is_exact_match() {
        let logger = RecordingLogger::new();

        assert!(handler_for(&record_with_type(Some("motion builder fbx")), &logger).is_none());
        assert!(handler_for(&record_with_type(Some("Motion Builder FBX ")), &logger).is_none());
    }
}

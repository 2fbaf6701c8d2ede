//! Motion Builder FBX handler
//!
//! Keeps the `current` symlink in the publish directory pointing at the
//! version directory of the record being processed.

use std::cell::OnceCell;

use crate::error::{PublinkError, PublinkResult};
use crate::link;
use crate::log::Logger;
use crate::models::PublishedFile;
use crate::parser::{parse_publish_path, PublishPath};

/// Handler for "Motion Builder FBX" published files
pub struct FbxHandler<'a> {
    record: PublishedFile,
    logger: &'a dyn Logger,
    resolved: OnceCell<Option<String>>,
    layout: OnceCell<Option<PublishPath>>,
}

impl<'a> FbxHandler<'a> {
    pub fn new(record: PublishedFile, logger: &'a dyn Logger) -> Self {
        Self {
            record,
            logger,
            resolved: OnceCell::new(),
            layout: OnceCell::new(),
        }
    }

    /// Path of the published file on shared storage, computed once
    ///
    /// An empty path field counts as absent.
    fn resolved_file_path(&self) -> Option<&str> {
        self.resolved
            .get_or_init(|| {
                self.record
                    .local_path()
                    .filter(|p| !p.is_empty())
                    .map(str::to_owned)
            })
            .as_deref()
    }

    /// Publish layout derived from the resolved path, computed once
    fn publish_layout(&self) -> Option<&PublishPath> {
        self.layout
            .get_or_init(|| parse_publish_path(self.resolved_file_path().unwrap_or("")))
            .as_ref()
    }
}

impl super::Handler for FbxHandler<'_> {
    fn logger(&self) -> &dyn Logger {
        self.logger
    }

    /// Both checks always run, so a record can produce two error entries.
    fn validate(&mut self) -> PublinkResult<bool> {
        let mut valid = true;

        if self.resolved_file_path().is_none() {
            self.logger.error(&format!(
                "could not determine the local path of '{}'",
                self.record.code
            ));
            valid = false;
        }

        if self.publish_layout().is_none() {
            self.logger.error(&format!(
                "'{}' does not match the publish template",
                self.resolved_file_path().unwrap_or("")
            ));
            valid = false;
        }

        Ok(valid)
    }

    fn execute(&mut self) -> PublinkResult<()> {
        let layout = match self.publish_layout() {
            Some(layout) => layout.clone(),
            None => {
                return Err(PublinkError::TemplateMismatch {
                    path: self.resolved_file_path().unwrap_or("").to_string(),
                })
            }
        };

        let current = link::replace_current(&layout.publish_dir, &layout.version_dir)?;
        match link::verify_current(&layout.publish_dir, &layout.version_dir) {
            Ok(()) => self.logger.info(&format!(
                "linked {} -> {}",
                current.display(),
                layout.version_dir.display()
            )),
            // The mismatch is reported, not retried; a concurrent publish may
            // legitimately have repointed the link already.
            Err(e @ PublinkError::LinkTargetMismatch { .. }) => self.logger.error(&e.to_string()),
            Err(e) => return Err(e),
        }
        Ok(())
    }
}

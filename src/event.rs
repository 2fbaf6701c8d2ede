//! Entry point for "published file status changed" events
//!
//! [`handle_status_change`] is what a host dispatcher wires its callback to;
//! [`registration`] describes how to wire it.

use crate::config::Config;
use crate::error::PublinkResult;
use crate::handler::{handler_for, process};
use crate::log::Logger;
use crate::models::StatusChangeEvent;
use crate::tracking::{find_project, find_published_file, TrackingClient};

/// Script name this handler registers under
pub const SCRIPT_NAME: &str = "published_file_status_change";

/// Callback registration metadata for the host dispatcher
#[derive(Debug, Clone)]
pub struct Registration {
    pub script_name: &'static str,
    /// Event types to subscribe to, paired with the field whose change fires
    /// the callback
    pub event_filters: &'static [(&'static str, &'static str)],
    pub defaults: Config,
}

/// Describe how this handler should be registered with a dispatcher
pub fn registration() -> Registration {
    Registration {
        script_name: SCRIPT_NAME,
        event_filters: &[("Shotgun_PublishedFile_Change", "sg_status_list")],
        defaults: Config::default(),
    }
}

/// React to a status change event
///
/// Fetches the changed record and its project, applies the project
/// allow-list, resolves a handler through the registry, and drives it through
/// its lifecycle. Outcomes are observed through `logger` and the filesystem;
/// the returned error covers only faults of the tracking client lookups that
/// happen before any handler runs.
pub fn handle_status_change(
    client: &dyn TrackingClient,
    logger: &dyn Logger,
    event: &StatusChangeEvent,
    config: &Config,
) -> PublinkResult<()> {
    let Some(published_file) = find_published_file(client, event.meta.entity_id)? else {
        logger.debug("exiting, the published file could not be found");
        return Ok(());
    };

    let project = find_project(client, event.project.id)?;

    // An intentional filter, not a failure: skip silently.
    let project_code = project.as_ref().and_then(|p| p.code.as_deref());
    if !config.allows(project_code) {
        return Ok(());
    }

    match handler_for(&published_file, logger) {
        Some(mut handler) => process(handler.as_mut()),
        None => logger.debug(&format!(
            "no handler implemented for published file '{}'",
            published_file.code
        )),
    }
    Ok(())
}

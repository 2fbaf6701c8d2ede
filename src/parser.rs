//! Publish-layout path parser
//!
//! Publishes land on shared storage under a fixed directory layout:
//!
//! ```text
//! /proj/{project}/assets/{asset_type}/{asset_name}/cg/{asset_step}/publish/v{NNN}/...
//! ```
//!
//! [`parse_publish_path`] matches a path against that layout and exposes the
//! publish directory (through the `publish` segment) and the version
//! directory (through the `vNNN` segment) plus the captured layout fields.
//! A path that does not follow the layout parses to `None`; that is a normal
//! outcome, not an error.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

// The character classes are deliberately permissive ([a0-z9_] spans far more
// than lowercase-plus-digits). Production paths have matched this template
// for years; do not tighten it.
static PUBLISH_TEMPLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<version_dir>(?P<publish_dir>/proj/(?P<project>[a0-z9_]+)/assets/(?P<asset_type>[a0-z9_]+)/(?P<asset_name>[a0-z9_]+)/cg/(?P<asset_step>[a0-z9]+)/publish)/v(?P<version>\d{3}))[a0-z9_/.]+",
    )
    .expect("publish template regex is valid")
});

/// Directories and layout fields derived from a publish path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishPath {
    /// Everything through the literal `publish` segment
    pub publish_dir: PathBuf,
    /// Everything through the `vNNN` segment
    pub version_dir: PathBuf,
    pub project: String,
    pub asset_type: String,
    pub asset_name: String,
    pub asset_step: String,
    /// The three-digit publish version
    pub version: u32,
}

/// Parse an absolute file path against the publish layout
///
/// Returns `None` when the path does not follow the layout.
pub fn parse_publish_path(path: &str) -> Option<PublishPath> {
    let caps = PUBLISH_TEMPLATE.captures(path)?;
    // The version group is three digits, so the parse cannot fail; ok() keeps
    // a non-match out of the panic path all the same.
    let version = caps["version"].parse().ok()?;

    Some(PublishPath {
        publish_dir: PathBuf::from(&caps["publish_dir"]),
        version_dir: PathBuf::from(&caps["version_dir"]),
        project: caps["project"].to_string(),
        asset_type: caps["asset_type"].to_string(),
        asset_name: caps["asset_name"].to_string(),
        asset_step: caps["asset_step"].to_string(),
        version,
    })
}

//! Script and style manifest
//!
//! The manifest is declarative. Each group has entries the host already knows
//! about, which are only enqueued, and assets that are registered first. On
//! every enqueue event the host names the page context it is building and
//! [`AssetManifest::apply`] enqueues whatever faces that context.

use crate::error::{AdminError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Host page context an asset is loaded on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Admin,
    Front,
    Login,
}

impl Facing {
    pub const ALL: [Facing; 3] = [Facing::Admin, Facing::Front, Facing::Login];

    /// Host action fired when assets for this context are enqueued
    pub fn hook_name(self) -> &'static str {
        match self {
            Facing::Admin => "admin_enqueue_scripts",
            Facing::Front => "wp_enqueue_scripts",
            Facing::Login => "login_enqueue_scripts",
        }
    }

    /// Look up the context for a host enqueue action
    pub fn from_hook_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.hook_name() == name)
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facing::Admin => write!(f, "admin"),
            Facing::Front => write!(f, "front"),
            Facing::Login => write!(f, "login"),
        }
    }
}

impl FromStr for Facing {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Facing::Admin),
            "front" => Ok(Facing::Front),
            "login" => Ok(Facing::Login),
            other => Err(format!("unknown facing '{other}'")),
        }
    }
}

/// An asset that must be registered with the host before it can be enqueued
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    pub handle: String,
    pub src: String,
    /// Handles that must load first
    pub deps: Vec<String>,
    pub version: Option<String>,
    /// Scripts only: print in the page footer
    pub in_footer: bool,
    /// Styles only: CSS media query
    pub media: Option<String>,
    pub facing: BTreeSet<Facing>,
}

/// An asset the host already has registered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnqueueEntry {
    pub handle: String,
    pub facing: BTreeSet<Facing>,
}

/// Scripts or styles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetGroup {
    /// Already registered; enqueue only
    pub enqueue: Vec<EnqueueEntry>,
    /// Register, then enqueue
    pub register: Vec<Asset>,
}

/// The host's script and style queue
pub trait AssetQueue {
    fn register_script(&mut self, asset: &Asset);

    fn enqueue_script(&mut self, handle: &str);

    fn register_style(&mut self, asset: &Asset);

    fn enqueue_style(&mut self, handle: &str);
}

#[derive(Debug, Clone, Copy)]
enum AssetKind {
    Script,
    Style,
}

impl AssetKind {
    fn register(self, queue: &mut dyn AssetQueue, asset: &Asset) {
        match self {
            AssetKind::Script => queue.register_script(asset),
            AssetKind::Style => queue.register_style(asset),
        }
    }

    fn enqueue(self, queue: &mut dyn AssetQueue, handle: &str) {
        match self {
            AssetKind::Script => queue.enqueue_script(handle),
            AssetKind::Style => queue.enqueue_style(handle),
        }
    }
}

impl AssetGroup {
    pub fn is_empty(&self) -> bool {
        self.enqueue.is_empty() && self.register.is_empty()
    }

    fn validate(&self) -> Result<()> {
        for handle in self.enqueue.iter().map(|e| &e.handle) {
            if handle.trim().is_empty() {
                return Err(AdminError::InvalidAsset {
                    handle: handle.clone(),
                    message: "handle is empty".to_string(),
                });
            }
        }
        for asset in &self.register {
            if asset.handle.trim().is_empty() {
                return Err(AdminError::InvalidAsset {
                    handle: asset.handle.clone(),
                    message: "handle is empty".to_string(),
                });
            }
            if asset.src.trim().is_empty() {
                return Err(AdminError::InvalidAsset {
                    handle: asset.handle.clone(),
                    message: "src is empty".to_string(),
                });
            }
        }
        Ok(())
    }

    fn apply(&self, kind: AssetKind, facing: Facing, queue: &mut dyn AssetQueue) -> usize {
        for asset in &self.register {
            trace!(?kind, handle = %asset.handle, "registering asset");
            kind.register(queue, asset);
        }

        let handles = self
            .enqueue
            .iter()
            .filter(|e| e.facing.contains(&facing))
            .map(|e| e.handle.as_str())
            .chain(
                self.register
                    .iter()
                    .filter(|a| a.facing.contains(&facing))
                    .map(|a| a.handle.as_str()),
            );

        let mut enqueued = 0;
        for handle in handles {
            trace!(?kind, handle = %handle, %facing, "enqueueing asset");
            kind.enqueue(queue, handle);
            enqueued += 1;
        }
        enqueued
    }
}

/// Scripts and styles a plugin loads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub scripts: AssetGroup,
    pub styles: AssetGroup,
}

impl AssetManifest {
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.styles.is_empty()
    }

    /// Check every entry has a handle and every registered asset a source
    pub fn validate(&self) -> Result<()> {
        self.scripts.validate()?;
        self.styles.validate()
    }

    /// Register every asset, then enqueue everything that faces `facing`.
    ///
    /// Scripts are handled before styles. Fails without touching the queue if
    /// the manifest does not validate.
    pub fn apply(&self, facing: Facing, queue: &mut dyn AssetQueue) -> Result<()> {
        self.validate()?;
        let scripts = self.scripts.apply(AssetKind::Script, facing, queue);
        let styles = self.styles.apply(AssetKind::Style, facing, queue);
        debug!(%facing, scripts, styles, "enqueued assets");
        Ok(())
    }
}

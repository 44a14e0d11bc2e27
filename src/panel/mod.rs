// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Panel lifecycle bookkeeping and message dispatch.
//!
//! The UI surfaces themselves belong to the host; this module only enforces
//! the one-surface-per-feature rule and relays typed messages across the
//! boundary. Per feature the lifecycle is Unopened → Open → Unopened:
//! opening while open reveals, disposal returns to Unopened, reopening
//! constructs a fresh surface.

pub mod messages;

pub use messages::{InboundMessage, OutboundMessage};

use crate::api::{ApiClient, ReleaseQuery};
use crate::config::RuntimeSettings;
use crate::discovery;
use crate::error::Result;
use log::{debug, info};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    JavaRuntime,
    ExtensionGuide,
    GettingStarted,
}

impl PanelKind {
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::JavaRuntime => "Configure Java Runtime",
            PanelKind::ExtensionGuide => "Extension Guide",
            PanelKind::GettingStarted => "Getting Started",
        }
    }

    /// Name of the fixed static document the surface loads. The documents
    /// themselves ship with the host and are opaque to this crate.
    pub fn document(&self) -> &'static str {
        match self {
            PanelKind::JavaRuntime => "java-runtime.html",
            PanelKind::ExtensionGuide => "extension-guide.html",
            PanelKind::GettingStarted => "getting-started.html",
        }
    }

    pub fn all() -> Vec<PanelKind> {
        vec![
            PanelKind::JavaRuntime,
            PanelKind::ExtensionGuide,
            PanelKind::GettingStarted,
        ]
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelKind::JavaRuntime => write!(f, "java-runtime"),
            PanelKind::ExtensionGuide => write!(f, "extension-guide"),
            PanelKind::GettingStarted => write!(f, "getting-started"),
        }
    }
}

/// UI surface owned by the host's container. The host implements this; the
/// crate only drives it.
pub trait PanelSurface {
    fn reveal(&mut self);
    fn load_document(&mut self, document: &str) -> Result<()>;
    fn post_message(&mut self, message: &OutboundMessage) -> Result<()>;
}

/// Per-feature panel registry plus the context the dispatchers need.
pub struct PanelHost<S: PanelSurface> {
    panels: HashMap<PanelKind, S>,
    api: ApiClient,
    settings: RuntimeSettings,
}

impl<S: PanelSurface> PanelHost<S> {
    pub fn new(settings: RuntimeSettings) -> Self {
        Self {
            panels: HashMap::new(),
            api: ApiClient::new(),
            settings,
        }
    }

    pub fn with_api_client(mut self, api: ApiClient) -> Self {
        self.api = api;
        self
    }

    pub fn is_open(&self, kind: PanelKind) -> bool {
        self.panels.contains_key(&kind)
    }

    /// Open the panel for `kind`.
    ///
    /// An existing surface is revealed and nothing else happens. Otherwise
    /// `create` constructs one, the kind's document is loaded, and the
    /// runtime panel additionally receives the discovered JDK entries.
    pub fn open<F>(&mut self, kind: PanelKind, create: F) -> Result<()>
    where
        F: FnOnce() -> Result<S>,
    {
        if let Some(surface) = self.panels.get_mut(&kind) {
            debug!("Panel {kind} already open, revealing");
            surface.reveal();
            return Ok(());
        }

        info!("Opening panel {kind}");
        let mut surface = create()?;
        surface.load_document(kind.document())?;

        if kind == PanelKind::JavaRuntime {
            let mut entries = discovery::enumerate_candidates(&self.settings);
            discovery::validate_entries(&mut entries);
            surface.post_message(&OutboundMessage::ShowJavaRuntimeEntries { entries })?;
        }

        self.panels.insert(kind, surface);
        Ok(())
    }

    /// Host callback for a surface disposed by the user or the container.
    /// The feature returns to the unopened state; reopening reconstructs.
    pub fn surface_disposed(&mut self, kind: PanelKind) {
        if self.panels.remove(&kind).is_some() {
            debug!("Panel {kind} disposed");
        }
    }

    /// Decode and react to one inbound UI message.
    ///
    /// Advisor failures propagate to the caller and nothing is posted; the
    /// suggestion area in the UI stays unpopulated.
    pub fn dispatch(&mut self, kind: PanelKind, raw: &str) -> Result<()> {
        match InboundMessage::decode(raw)? {
            InboundMessage::RequestJdkInfo {
                jdk_version,
                jvm_impl,
            } => {
                let query = ReleaseQuery::new().jdk_version(jdk_version).jvm_impl(jvm_impl);
                let jdk_info = self.api.latest_release(&query)?;
                if let Some(surface) = self.panels.get_mut(&kind) {
                    surface.post_message(&OutboundMessage::ApplyJdkInfo { jdk_info })?;
                }
                Ok(())
            }
            InboundMessage::TabActivated { tab_id } => {
                // Telemetry forwarding only; no state changes
                info!("Panel {kind}: tab activated: {tab_id}");
                Ok(())
            }
        }
    }
}

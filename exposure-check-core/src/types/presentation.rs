//! Flat display model handed to the presentation sink.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Text shown in a slot when an outbound call failed.
pub const ERROR_MARKER: &str = "error";
/// Default for slots whose source data is missing.
pub const UNKNOWN: &str = "unknown";
/// Default for the open ports slot when nothing is open.
pub const NONE: &str = "none";
/// Text of a slot that has not been filled yet.
pub const PENDING: &str = "...";

/// Named display slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Address,
    Hostname,
    Os,
    Location,
    Provider,
    Vpn,
    Tor,
    Ports,
    Blacklist,
    DnsLeak,
}

impl Slot {
    /// Slots filled from the quick analysis, in display order.
    pub const ANALYSIS: [Self; 9] = [
        Self::Address,
        Self::Hostname,
        Self::Os,
        Self::Location,
        Self::Provider,
        Self::Vpn,
        Self::Tor,
        Self::Ports,
        Self::Blacklist,
    ];

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Address => "IP address",
            Self::Hostname => "Hostname",
            Self::Os => "Operating system",
            Self::Location => "Location",
            Self::Provider => "Provider",
            Self::Vpn => "VPN",
            Self::Tor => "Tor",
            Self::Ports => "Open ports",
            Self::Blacklist => "Blacklists",
            Self::DnsLeak => "DNS leak",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One rendered value plus its alert styling flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCell {
    pub text: String,
    pub alert: bool,
}

impl DisplayCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alert: false,
        }
    }

    pub fn alert(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alert: true,
        }
    }

    pub fn error() -> Self {
        Self::plain(ERROR_MARKER)
    }

    pub fn is_error(&self) -> bool {
        self.text == ERROR_MARKER
    }
}

/// Normalized analysis, one cell per analysis slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationFields {
    pub address: DisplayCell,
    pub hostname: DisplayCell,
    pub operating_system: DisplayCell,
    pub location: DisplayCell,
    pub provider: DisplayCell,
    pub vpn_status: DisplayCell,
    pub tor_status: DisplayCell,
    pub open_ports: DisplayCell,
    pub blacklist_status: DisplayCell,
}

impl PresentationFields {
    /// Every slot set to the error marker.
    pub fn all_errors() -> Self {
        Self {
            address: DisplayCell::error(),
            hostname: DisplayCell::error(),
            operating_system: DisplayCell::error(),
            location: DisplayCell::error(),
            provider: DisplayCell::error(),
            vpn_status: DisplayCell::error(),
            tor_status: DisplayCell::error(),
            open_ports: DisplayCell::error(),
            blacklist_status: DisplayCell::error(),
        }
    }

    /// Cell for an analysis slot. `None` for [`Slot::DnsLeak`].
    pub fn get(&self, slot: Slot) -> Option<&DisplayCell> {
        let cell = match slot {
            Slot::Address => &self.address,
            Slot::Hostname => &self.hostname,
            Slot::Os => &self.operating_system,
            Slot::Location => &self.location,
            Slot::Provider => &self.provider,
            Slot::Vpn => &self.vpn_status,
            Slot::Tor => &self.tor_status,
            Slot::Ports => &self.open_ports,
            Slot::Blacklist => &self.blacklist_status,
            Slot::DnsLeak => return None,
        };
        Some(cell)
    }

    /// `(slot, cell)` pairs in display order.
    pub fn cells(&self) -> impl Iterator<Item = (Slot, &DisplayCell)> {
        Slot::ANALYSIS
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|cell| (slot, cell)))
    }
}

/// Operating system icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsIcon {
    Windows,
    Apple,
    Android,
    Linux,
    Desktop,
}

/// Browser icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrowserIcon {
    Firefox,
    Edge,
    Chrome,
    Safari,
    Opera,
    InternetExplorer,
    Globe,
}

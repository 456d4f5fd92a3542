//! Symbol catalog module
//!
//! This module provides:
//! - Classifications that partition the catalog
//! - Symbol reference entries (read-only at runtime)
//! - The catalog registry with the standard libraries
//! - Case-insensitive search over label, category and code

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Catalog partitions selecting which symbols are available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Low voltage systems (data, voice, AV)
    LowVoltage,
    /// Fire detection and alarm devices
    FireAlarm,
    /// Access control and surveillance
    Security,
    /// Line voltage power and lighting
    Electrical,
    /// Network infrastructure
    DataNetwork,
}

impl Classification {
    /// Every classification, in display order
    pub fn all() -> &'static [Classification] {
        &[
            Classification::LowVoltage,
            Classification::FireAlarm,
            Classification::Security,
            Classification::Electrical,
            Classification::DataNetwork,
        ]
    }

    /// Get classification key as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::LowVoltage => "low_voltage",
            Classification::FireAlarm => "fire_alarm",
            Classification::Security => "security",
            Classification::Electrical => "electrical",
            Classification::DataNetwork => "data_network",
        }
    }

    /// Parse from string key
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low_voltage" => Some(Classification::LowVoltage),
            "fire_alarm" => Some(Classification::FireAlarm),
            "security" => Some(Classification::Security),
            "electrical" => Some(Classification::Electrical),
            "data_network" => Some(Classification::DataNetwork),
            _ => None,
        }
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::LowVoltage
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LowVoltage => write!(f, "Low Voltage"),
            Self::FireAlarm => write!(f, "Fire Alarm"),
            Self::Security => write!(f, "Security"),
            Self::Electrical => write!(f, "Electrical"),
            Self::DataNetwork => write!(f, "Data Network"),
        }
    }
}

/// Unique symbol identifier within a classification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(pub String);

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SymbolId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Catalog entry that can be placed on a drawing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub id: SymbolId,
    pub label: String,
    /// Short display token drawn on the canvas
    pub glyph: String,
    pub category: String,
    pub code: String,
    pub classification: Classification,
}

impl Symbol {
    /// Create a new symbol
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        glyph: impl Into<String>,
        category: impl Into<String>,
        code: impl Into<String>,
        classification: Classification,
    ) -> Self {
        Self {
            id: SymbolId(id.into()),
            label: label.into(),
            glyph: glyph.into(),
            category: category.into(),
            code: code.into(),
            classification,
        }
    }

    /// Check if symbol matches a lowercased search query
    fn matches_lowercase(&self, q: &str) -> bool {
        self.label.to_lowercase().contains(q)
            || self.category.to_lowercase().contains(q)
            || self.code.to_lowercase().contains(q)
    }

    /// Check if symbol matches search query (case-insensitive)
    pub fn matches_search(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }
}

/// Filter `symbols` by a case-insensitive substring of label, category or code.
///
/// A blank query returns every symbol. Order is preserved.
pub fn search<'a>(symbols: &'a [Symbol], query: &str) -> Vec<&'a Symbol> {
    if query.trim().is_empty() {
        return symbols.iter().collect();
    }
    let q = query.to_lowercase();
    symbols.iter().filter(|s| s.matches_lowercase(&q)).collect()
}

/// Registry of symbol libraries keyed by classification
#[derive(Debug, Clone, Default)]
pub struct SymbolCatalog {
    libraries: HashMap<Classification, Vec<Symbol>>,
}

impl SymbolCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the catalog with the standard libraries loaded
    pub fn standard() -> Self {
        init_standard_catalog()
    }

    /// Append a symbol to its classification's library
    pub fn add_symbol(&mut self, symbol: Symbol) {
        self.libraries
            .entry(symbol.classification)
            .or_default()
            .push(symbol);
    }

    /// Get the library for a classification (empty when none is loaded)
    pub fn symbols(&self, classification: Classification) -> &[Symbol] {
        self.libraries
            .get(&classification)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Get the library for a classification key (empty for unknown keys)
    pub fn symbols_for_key(&self, key: &str) -> &[Symbol] {
        match Classification::parse(key) {
            Some(classification) => self.symbols(classification),
            None => {
                tracing::warn!("Unknown classification key {:?}", key);
                &[]
            }
        }
    }

    /// Look up a symbol by id within a classification
    pub fn find(&self, classification: Classification, id: &SymbolId) -> Option<&Symbol> {
        self.symbols(classification).iter().find(|s| &s.id == id)
    }

    /// Get total number of symbols across all classifications
    pub fn len(&self) -> usize {
        self.libraries.values().map(Vec::len).sum()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the catalog shipped with the application
pub fn init_standard_catalog() -> SymbolCatalog {
    use Classification::*;

    let entries: &[(&str, &str, &str, &str, &str, Classification)] = &[
        ("lv-data", "Data Outlet", "D", "Data", "LV-101", LowVoltage),
        ("lv-voice", "Voice Outlet", "V", "Voice", "LV-102", LowVoltage),
        ("lv-combo", "Voice/Data Outlet", "VD", "Data", "LV-103", LowVoltage),
        ("lv-wap", "Wireless Access Point", "WAP", "Wireless", "LV-110", LowVoltage),
        ("lv-tv", "TV Outlet", "TV", "Audio/Visual", "LV-120", LowVoltage),
        ("lv-speaker", "Ceiling Speaker", "SPK", "Audio/Visual", "LV-121", LowVoltage),
        ("lv-projector", "Projector", "PJ", "Audio/Visual", "LV-122", LowVoltage),
        ("lv-floor-box", "Floor Box", "FB", "Pathway", "LV-130", LowVoltage),
        ("fa-smoke", "Smoke Detector", "SD", "Detection", "FA-201", FireAlarm),
        ("fa-heat", "Heat Detector", "HD", "Detection", "FA-202", FireAlarm),
        ("fa-pull", "Pull Station", "PS", "Initiating", "FA-210", FireAlarm),
        ("fa-horn-strobe", "Horn/Strobe", "HS", "Notification", "FA-220", FireAlarm),
        ("fa-strobe", "Strobe", "S", "Notification", "FA-221", FireAlarm),
        ("fa-panel", "Fire Alarm Control Panel", "FACP", "Control", "FA-230", FireAlarm),
        ("sec-camera", "Camera", "CAM", "Surveillance", "SEC-301", Security),
        ("sec-card-reader", "Card Reader", "CR", "Access Control", "SEC-310", Security),
        ("sec-door-contact", "Door Contact", "DC", "Intrusion", "SEC-320", Security),
        ("sec-motion", "Motion Detector", "MD", "Intrusion", "SEC-321", Security),
        ("sec-keypad", "Keypad", "KP", "Intrusion", "SEC-322", Security),
        ("el-outlet", "Outlet", "O", "Receptacles", "E-101", Electrical),
        ("el-gfci", "GFCI Outlet", "GFI", "Receptacles", "E-102", Electrical),
        ("el-switch", "Switch", "S", "Controls", "E-201", Electrical),
        ("el-light", "Light Fixture", "L", "Lighting", "E-301", Electrical),
        ("el-panel", "Panelboard", "PNL", "Distribution", "E-401", Electrical),
        ("dn-rack", "Equipment Rack", "RK", "Infrastructure", "DN-501", DataNetwork),
        ("dn-patch", "Patch Panel", "PP", "Infrastructure", "DN-502", DataNetwork),
        ("dn-switch", "Network Switch", "NSW", "Active", "DN-510", DataNetwork),
        ("dn-router", "Router", "RTR", "Active", "DN-511", DataNetwork),
    ];

    let mut catalog = SymbolCatalog::new();
    for &(id, label, glyph, category, code, classification) in entries {
        catalog.add_symbol(Symbol::new(id, label, glyph, category, code, classification));
    }
    catalog
}

pub mod mapping;
pub mod tables;

use serde::{Serialize, Serializer};

use crate::model::differential::DifferentialDef;
use crate::model::reference::{QualitativeDef, RangeDef};

pub use mapping::canonical_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Panel {
    Cbc,
    Lft,
    Kft,
    Lipid,
    Sugar,
    Urine,
    Tft,
    Rheumatology,
    Oncology,
}

const ALL_PANELS: &[Panel] = &[
    Panel::Cbc,
    Panel::Lft,
    Panel::Kft,
    Panel::Lipid,
    Panel::Sugar,
    Panel::Urine,
    Panel::Tft,
    Panel::Rheumatology,
    Panel::Oncology,
];

impl Panel {
    /// Registry order; also the order `find_panel_for_parameter` searches.
    pub fn all() -> &'static [Panel] {
        ALL_PANELS
    }

    pub fn id(self) -> &'static str {
        match self {
            Panel::Cbc => "cbc",
            Panel::Lft => "lft",
            Panel::Kft => "kft",
            Panel::Lipid => "lipid",
            Panel::Sugar => "sugar",
            Panel::Urine => "urine",
            Panel::Tft => "tft",
            Panel::Rheumatology => "rheumatology",
            Panel::Oncology => "oncology",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Panel::Cbc => "CBC",
            Panel::Lft => "LFT",
            Panel::Kft => "KFT",
            Panel::Lipid => "Lipid",
            Panel::Sugar => "Sugar",
            Panel::Urine => "Urine",
            Panel::Tft => "TFT",
            Panel::Rheumatology => "Rheumatology",
            Panel::Oncology => "Oncology",
        }
    }

    /// Accepts either the id or the display name, case-insensitively.
    pub fn parse(raw: &str) -> Option<Panel> {
        let key = raw.trim();
        ALL_PANELS
            .iter()
            .copied()
            .find(|p| p.id().eq_ignore_ascii_case(key) || p.name().eq_ignore_ascii_case(key))
    }

    pub fn tables(self) -> &'static PanelTables {
        match self {
            Panel::Cbc => &tables::cbc::TABLES,
            Panel::Lft => &tables::lft::TABLES,
            Panel::Kft => &tables::kft::TABLES,
            Panel::Lipid => &tables::lipid::TABLES,
            Panel::Sugar => &tables::sugar::TABLES,
            Panel::Urine => &tables::urine::TABLES,
            Panel::Tft => &tables::tft::TABLES,
            Panel::Rheumatology => &tables::rheumatology::TABLES,
            Panel::Oncology => &tables::oncology::TABLES,
        }
    }
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Panel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Static reference data owned by one panel. Every lookup goes through a
/// panel's tables, so analyte names never collide across panels.
#[derive(Debug)]
pub struct PanelTables {
    pub registry: &'static [&'static str],
    pub ranges: &'static [RangeDef],
    pub qualitative: &'static [QualitativeDef],
    pub differentials: &'static [DifferentialDef],
    /// Per-parameter teaching text, where authored.
    pub learning: &'static [(&'static str, &'static str)],
    pub overview: &'static str,
    pub learning_points: &'static [&'static str],
}

impl PanelTables {
    pub fn learning_for(&self, name: &str) -> Option<&'static str> {
        self.learning
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, text)| *text)
    }
}

/// Owning panel of a parameter. Canonical keys are searched first, then each
/// panel's aliases. Unregistered names fall back to CBC, where they classify
/// as unknown.
pub fn find_panel_for_parameter(name: &str) -> Panel {
    let name = name.trim();
    for panel in ALL_PANELS {
        if panel.tables().registry.contains(&name) {
            return *panel;
        }
    }
    for exact in [true, false] {
        for panel in ALL_PANELS {
            if mapping::find_alias(*panel, name, exact).is_some() {
                return *panel;
            }
        }
    }
    Panel::Cbc
}

#[cfg(test)]
#[path = "../../tests/src_inline/panels/tests.rs"]
mod tests;

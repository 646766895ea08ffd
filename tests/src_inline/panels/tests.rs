use super::*;
use crate::model::reference::lookup_range;
use crate::model::value::Sex;

#[test]
fn test_panel_ids_and_parse() {
    assert_eq!(Panel::all().len(), 9);
    for panel in Panel::all() {
        assert_eq!(Panel::parse(panel.id()), Some(*panel));
        assert_eq!(Panel::parse(panel.name()), Some(*panel));
    }
    assert_eq!(Panel::parse("CBC"), Some(Panel::Cbc));
    assert_eq!(Panel::parse(" tft "), Some(Panel::Tft));
    assert_eq!(Panel::parse("hormones"), None);
}

#[test]
fn test_registry_keys_unique_across_panels() {
    let mut seen = std::collections::BTreeSet::new();
    for panel in Panel::all() {
        for key in panel.tables().registry {
            assert!(seen.insert(*key), "duplicate registry key {key}");
        }
    }
}

#[test]
fn test_every_range_has_default_bucket_and_ordered_bounds() {
    for panel in Panel::all() {
        let tables = panel.tables();
        for def in tables.ranges {
            let fallback = lookup_range(tables.ranges, def.name, Sex::Default);
            assert!(fallback.is_some(), "{} has no default row in {}", def.name, panel.id());
            let r = def.range;
            assert!(r.low <= r.high, "{} low > high", def.name);
            if let Some(cl) = r.critical_low {
                assert!(cl <= r.low, "{} critical_low above low", def.name);
            }
            if let Some(ch) = r.critical_high {
                assert!(ch >= r.high, "{} critical_high below high", def.name);
            }
        }
    }
}

#[test]
fn test_lft_has_no_critical_tier() {
    for def in Panel::Lft.tables().ranges {
        assert_eq!(def.range.critical_low, None);
        assert_eq!(def.range.critical_high, None);
    }
}

#[test]
fn test_qualitative_defs_have_no_numeric_range() {
    for panel in Panel::all() {
        let tables = panel.tables();
        for def in tables.qualitative {
            assert!(!def.normal_terms.is_empty());
            assert!(lookup_range(tables.ranges, def.name, Sex::Default).is_none());
        }
    }
}

#[test]
fn test_differentials_reference_known_parameters() {
    for panel in Panel::all() {
        let tables = panel.tables();
        for def in tables.differentials {
            let has_range = tables.ranges.iter().any(|r| r.name == def.name);
            let has_qual = tables.qualitative.iter().any(|q| q.name == def.name);
            assert!(has_range || has_qual, "{} differential without reference data", def.name);
            assert!(!def.bundle.differentials.is_empty());
        }
    }
}

#[test]
fn test_overview_present_for_every_panel() {
    for panel in Panel::all() {
        assert!(!panel.tables().overview.is_empty());
    }
}

#[test]
fn test_find_panel_for_parameter() {
    assert_eq!(find_panel_for_parameter("Hemoglobin"), Panel::Cbc);
    assert_eq!(find_panel_for_parameter("ALT"), Panel::Lft);
    assert_eq!(find_panel_for_parameter("LDH"), Panel::Lft);
    assert_eq!(find_panel_for_parameter("Onco_LDH"), Panel::Oncology);
    assert_eq!(find_panel_for_parameter("Thyroglobulin"), Panel::Tft);
    assert_eq!(find_panel_for_parameter("Sodium"), Panel::Kft);
    assert_eq!(find_panel_for_parameter("Na"), Panel::Kft);
    assert_eq!(find_panel_for_parameter("TG"), Panel::Lipid);
    assert_eq!(find_panel_for_parameter("Tg"), Panel::Tft);
    assert_eq!(find_panel_for_parameter("ANA"), Panel::Rheumatology);
    assert_eq!(find_panel_for_parameter("XYZ_Unknown"), Panel::Cbc);
}

#[test]
fn test_canonical_name_per_panel() {
    assert_eq!(canonical_name(Panel::Cbc, "Hb"), "Hemoglobin");
    assert_eq!(canonical_name(Panel::Cbc, "hgb"), "Hemoglobin");
    assert_eq!(canonical_name(Panel::Oncology, "LDH"), "Onco_LDH");
    assert_eq!(canonical_name(Panel::Lft, "LDH"), "LDH");
    assert_eq!(canonical_name(Panel::Oncology, "Thyroglobulin"), "Onco_Thyroglobulin");
    assert_eq!(canonical_name(Panel::Tft, "Thyroglobulin"), "Thyroglobulin");
    assert_eq!(canonical_name(Panel::Kft, " Na "), "Sodium");
    assert_eq!(canonical_name(Panel::Kft, "XYZ_Unknown"), "XYZ_Unknown");
}

#[test]
fn test_learning_text_lookup() {
    assert!(Panel::Kft.tables().learning_for("Creatinine").is_some());
    assert!(Panel::Lipid.tables().learning_for("LDL").is_some());
    assert!(Panel::Cbc.tables().learning_for("Hemoglobin").is_none());
}

#[test]
fn test_panel_serializes_as_name() {
    assert_eq!(serde_json::to_string(&Panel::Tft).unwrap(), "\"TFT\"");
    assert_eq!(Panel::Rheumatology.to_string(), "Rheumatology");
}

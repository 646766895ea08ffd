use serde::Serialize;

use crate::model::value::Sex;

/// Resolved bounds for one parameter and sex bucket. Missing critical bounds
/// never trigger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceRange {
    pub low: f64,
    pub high: f64,
    pub critical_low: Option<f64>,
    pub critical_high: Option<f64>,
    pub unit: &'static str,
}

/// One row of a static range table.
#[derive(Debug, Clone, Copy)]
pub struct RangeDef {
    pub name: &'static str,
    pub sex: Sex,
    pub range: ReferenceRange,
}

/// Normal-term list for a text-valued parameter. Matching is a
/// case-insensitive substring test.
#[derive(Debug, Clone, Copy)]
pub struct QualitativeDef {
    pub name: &'static str,
    pub normal_terms: &'static [&'static str],
}

pub const fn range(
    name: &'static str,
    sex: Sex,
    low: f64,
    high: f64,
    critical_low: f64,
    critical_high: f64,
    unit: &'static str,
) -> RangeDef {
    RangeDef {
        name,
        sex,
        range: ReferenceRange {
            low,
            high,
            critical_low: Some(critical_low),
            critical_high: Some(critical_high),
            unit,
        },
    }
}

/// Row without a critical tier.
pub const fn range_nc(
    name: &'static str,
    sex: Sex,
    low: f64,
    high: f64,
    unit: &'static str,
) -> RangeDef {
    RangeDef {
        name,
        sex,
        range: ReferenceRange {
            low,
            high,
            critical_low: None,
            critical_high: None,
            unit,
        },
    }
}

/// Exact sex match first, then the `Default` row.
pub fn lookup_range(table: &[RangeDef], name: &str, sex: Sex) -> Option<ReferenceRange> {
    let mut fallback = None;
    for def in table {
        if def.name != name {
            continue;
        }
        if def.sex == sex {
            return Some(def.range);
        }
        if def.sex == Sex::Default {
            fallback = Some(def.range);
        }
    }
    fallback
}

pub fn lookup_qualitative<'a>(table: &'a [QualitativeDef], name: &str) -> Option<&'a QualitativeDef> {
    table.iter().find(|def| def.name == name)
}

use serde::Serialize;

use crate::model::status::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Differential {
    pub condition: &'static str,
    pub discussion: &'static str,
}

/// Authored differential list. Order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DifferentialBundle {
    pub title: &'static str,
    pub differentials: &'static [Differential],
}

#[derive(Debug, Clone, Copy)]
pub struct DifferentialDef {
    pub name: &'static str,
    pub direction: Direction,
    pub bundle: DifferentialBundle,
}

pub const fn dx(condition: &'static str, discussion: &'static str) -> Differential {
    Differential {
        condition,
        discussion,
    }
}

pub const fn bundle(
    name: &'static str,
    direction: Direction,
    title: &'static str,
    differentials: &'static [Differential],
) -> DifferentialDef {
    DifferentialDef {
        name,
        direction,
        bundle: DifferentialBundle {
            title,
            differentials,
        },
    }
}

pub fn lookup_bundle(
    table: &'static [DifferentialDef],
    name: &str,
    direction: Direction,
) -> Option<&'static DifferentialBundle> {
    table
        .iter()
        .find(|def| def.name == name && def.direction == direction)
        .map(|def| &def.bundle)
}

//! Display group definitions
//!
//! Ships are bucketed by type code. Order here is display order; a type code
//! that appears in no group is never shown.

use super::types::GroupDefinition;

pub static BATTLESHIPS: GroupDefinition = GroupDefinition::new("BB/BC", &["BB", "FBB", "BBV", "XBB"]);

pub static CARRIERS: GroupDefinition = GroupDefinition::new("CV/CVL", &["CV", "CVB", "CVL"]);

pub static HEAVY_CRUISERS: GroupDefinition = GroupDefinition::new("CA", &["CA", "CAV"]);

pub static AUXILIARIES: GroupDefinition =
    GroupDefinition::new("AV/AO/AS..", &["AV", "AS", "LHA", "AO", "AR"]);

pub static ESCORTS: GroupDefinition = GroupDefinition::new("DE", &["DE"]);

pub static LIGHT_CRUISERS: GroupDefinition = GroupDefinition::new("CL", &["CL", "CLT", "CT"]);

pub static DESTROYERS: GroupDefinition = GroupDefinition::new("DD", &["DD"]);

pub static SUBMARINES: GroupDefinition = GroupDefinition::new("SS", &["SS", "SSV"]);

/// All groups in display order
pub static SHIP_GROUPS: &[&GroupDefinition] = &[
    &BATTLESHIPS,
    &CARRIERS,
    &HEAVY_CRUISERS,
    &AUXILIARIES,
    &ESCORTS,
    &LIGHT_CRUISERS,
    &DESTROYERS,
    &SUBMARINES,
];

/// Find the group a type code belongs to
pub fn group_for_type(ship_type: &str) -> Option<&'static GroupDefinition> {
    SHIP_GROUPS.iter().copied().find(|g| g.contains(ship_type))
}

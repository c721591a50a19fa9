//! Views derived from the catalog and the override map
//!
//! Everything here is recomputed from scratch on each call; the catalog is a
//! few hundred rows at most.

use serde::Serialize;

use crate::catalog::{Catalog, ShipRecord};
use crate::schema::GroupDefinition;
use crate::store::{OverrideEntry, Overrides};

/// Summed materials over ships whose remodel is not done
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MaterialTotals {
    pub blueprint: u64,
    pub report: u64,
    pub catapult: u64,
}

/// Single marker shown on a card, strongest state wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusMarker {
    RemodelDone,
    NotOwned,
    LevelingDone,
    None,
}

impl StatusMarker {
    pub fn for_entry(entry: &OverrideEntry) -> Self {
        if entry.remodel_done {
            StatusMarker::RemodelDone
        } else if entry.not_owned {
            StatusMarker::NotOwned
        } else if entry.leveling_done {
            StatusMarker::LevelingDone
        } else {
            StatusMarker::None
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            StatusMarker::RemodelDone => "✓",
            StatusMarker::NotOwned => "✗",
            StatusMarker::LevelingDone => "○",
            StatusMarker::None => " ",
        }
    }
}

/// A catalog record joined with its override flags
#[derive(Debug, Clone, Copy)]
pub struct ShipCard<'a> {
    pub ship: &'a ShipRecord,
    pub flags: OverrideEntry,
}

impl ShipCard<'_> {
    pub fn marker(&self) -> StatusMarker {
        StatusMarker::for_entry(&self.flags)
    }
}

/// Visible ships of one group
#[derive(Debug, Clone)]
pub struct GroupView<'a> {
    pub group: &'a GroupDefinition,
    pub cards: Vec<ShipCard<'a>>,
}

/// Ships of the given group in catalog order, optionally hiding finished remodels
pub fn filter_for_group<'a>(
    group: &GroupDefinition,
    catalog: &'a Catalog,
    overrides: &Overrides,
    show_incomplete_only: bool,
) -> Vec<&'a ShipRecord> {
    catalog
        .iter()
        .filter(|ship| group.contains(&ship.ship_type))
        .filter(|ship| !(show_incomplete_only && overrides.is_remodel_done(&ship.id)))
        .collect()
}

/// Blueprint, report and catapult totals over ships not marked remodel-done
pub fn aggregate_materials(catalog: &Catalog, overrides: &Overrides) -> MaterialTotals {
    catalog
        .iter()
        .filter(|ship| !overrides.is_remodel_done(&ship.id))
        .fold(MaterialTotals::default(), |acc, ship| MaterialTotals {
            blueprint: acc.blueprint + u64::from(ship.materials.blueprint),
            report: acc.report + u64::from(ship.materials.report),
            catapult: acc.catapult + u64::from(ship.materials.catapult),
        })
}

/// Display list grouped by definition order. Groups with no visible ship are omitted.
pub fn grouped_view<'a>(
    groups: &[&'a GroupDefinition],
    catalog: &'a Catalog,
    overrides: &Overrides,
    show_incomplete_only: bool,
) -> Vec<GroupView<'a>> {
    groups
        .iter()
        .map(|group| GroupView {
            group: *group,
            cards: filter_for_group(group, catalog, overrides, show_incomplete_only)
                .into_iter()
                .map(|ship| ShipCard {
                    ship,
                    flags: overrides.get(&ship.id),
                })
                .collect(),
        })
        .filter(|view| !view.cards.is_empty())
        .collect()
}

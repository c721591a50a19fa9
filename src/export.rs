//! Snapshot export of the current view
//!
//! The snapshot carries what a rendered plan image shows: grouped visible
//! ships with their flags, the totals, and the selected language's strings.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::schema::Language;
use crate::state::AppState;
use crate::store::Storage;
use crate::view::{MaterialTotals, ShipCard, StatusMarker};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub language: Language,
    pub title: String,
    pub filter_label: String,
    pub show_incomplete_only: bool,
    pub totals: MaterialTotals,
    pub groups: Vec<GroupSnapshot>,
}

#[derive(Debug, Serialize)]
pub struct GroupSnapshot {
    pub title: String,
    pub ships: Vec<ShipSnapshot>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipSnapshot {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub ship_type: String,
    pub remodel_level: u32,
    pub image: String,
    pub materials: Vec<MaterialSnapshot>,
    pub not_owned: bool,
    pub leveling_done: bool,
    pub remodel_done: bool,
    pub marker: StatusMarker,
}

#[derive(Debug, Serialize)]
pub struct MaterialSnapshot {
    pub key: &'static str,
    pub icon: &'static str,
    pub count: u32,
}

impl ShipSnapshot {
    fn from_card(card: &ShipCard<'_>, language: Language) -> Self {
        Self {
            id: card.ship.id.clone(),
            name: card.ship.display_name(language).to_string(),
            ship_type: card.ship.ship_type.clone(),
            remodel_level: card.ship.remodel_level,
            image: card.ship.image_file(),
            materials: card
                .ship
                .materials
                .required()
                .map(|(material, count)| MaterialSnapshot {
                    key: material.key(),
                    icon: material.icon_file(),
                    count,
                })
                .collect(),
            not_owned: card.flags.not_owned,
            leveling_done: card.flags.leveling_done,
            remodel_done: card.flags.remodel_done,
            marker: card.marker(),
        }
    }
}

/// Capture the current derived view
pub fn snapshot<S: Storage>(state: &AppState<S>) -> Snapshot {
    let text = state.text();
    let groups = state
        .grouped()
        .iter()
        .map(|view| GroupSnapshot {
            title: view.group.title.to_string(),
            ships: view
                .cards
                .iter()
                .map(|card| ShipSnapshot::from_card(card, state.language))
                .collect(),
        })
        .collect();

    Snapshot {
        language: state.language,
        title: text.title.to_string(),
        filter_label: if state.show_incomplete_only {
            text.view_incomplete.to_string()
        } else {
            text.view_all.to_string()
        },
        show_incomplete_only: state.show_incomplete_only,
        totals: state.totals(),
        groups,
    }
}

/// Write the snapshot as pretty JSON. Returns the number of ships written.
pub fn export_snapshot<S: Storage>(state: &AppState<S>, output: &Path) -> Result<usize> {
    let snapshot = snapshot(state);
    let ship_count = snapshot.groups.iter().map(|g| g.ships.len()).sum();

    let file = File::create(output)
        .with_context(|| format!("Failed to create export file: {:?}", output))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &snapshot)
        .with_context(|| format!("Failed to write export file: {:?}", output))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write export file: {:?}", output))?;

    Ok(ship_count)
}

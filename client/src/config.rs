use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, ensure};
use libgame::Position;
use log::debug;
use serde::{Deserialize, Serialize};

const BUILTIN_PRESETS: &str = include_str!("../presets.json");

/// A named starting pattern with the board it is meant to run on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Preset {
    pub width: usize,
    pub height: usize,

    /// Alive cells as `[x, y]` pairs.
    pub coordinates: Vec<[usize; 2]>,
}

impl Preset {
    pub fn positions(&self) -> Vec<Position> {
        self.coordinates
            .iter()
            .copied()
            .map(Position::from)
            .collect()
    }

    fn validate(&self, name: &str) -> anyhow::Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "Preset '{name}' has an empty board"
        );

        for &[x, y] in &self.coordinates {
            ensure!(
                x < self.width && y < self.height,
                "Preset '{name}' has coordinate ({x},{y}) outside its {}x{} board",
                self.width,
                self.height
            );
        }

        Ok(())
    }
}

/// Named presets, read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PresetTable(BTreeMap<String, Preset>);

impl PresetTable {
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(BUILTIN_PRESETS).context("Couldn't parse built-in presets")
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let table: Self = serde_json::from_str(json).context("Couldn't deserialize presets")?;

        for (name, preset) in &table.0 {
            preset.validate(name)?;
        }

        Ok(table)
    }

    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Couldn't read presets from {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Entries of `other` are added, replacing presets of the same name.
    pub fn merged(mut self, other: PresetTable) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.0.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// The built-in presets, extended by the ones in `extra_path` if given.
pub fn load_presets(extra_path: Option<&Path>) -> anyhow::Result<PresetTable> {
    let presets = PresetTable::builtin()?;

    let Some(extra_path) = extra_path else {
        return Ok(presets);
    };

    let extra = PresetTable::load(extra_path)?;
    debug!(
        "loaded {} presets from {}",
        extra.names().count(),
        extra_path.display()
    );

    Ok(presets.merged(extra))
}

//! CSV table loading.
//!
//! Headers and fields are trimmed, so `" Occupation"` matches
//! `Occupation`. Rows may carry more or fewer fields than the header;
//! extra trailing fields are ignored. Files that are not valid UTF-8 are
//! decoded as Latin-1.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::info;

use zl_core::{
    BirthAugurEntry, BirthAugurTable, OccupationEntry, OccupationTable, RollSpec, Tables,
    WeaponEntry, WeaponTable,
};

use crate::config::TablePaths;
use crate::error::CliError;

#[derive(Debug, Deserialize)]
struct OccupationRow {
    roll: String,
    #[serde(rename = "Occupation")]
    occupation: String,
    #[serde(rename = "Trained Weapon")]
    trained_weapon: String,
    #[serde(rename = "Trade Good")]
    trade_good: String,
}

#[derive(Debug, Deserialize)]
struct WeaponRow {
    #[serde(rename = "Weapon")]
    weapon: String,
    #[serde(rename = "Damage")]
    damage: String,
    #[serde(rename = "Range")]
    range: String,
}

#[derive(Debug, Deserialize)]
struct AugurRow {
    d30: u32,
    #[serde(rename = "Birth Augur")]
    birth_augur: String,
    #[serde(rename = "Lucky Roll")]
    lucky_roll: String,
}

/// Load all three tables.
pub fn load_tables(paths: &TablePaths) -> Result<Tables, CliError> {
    let occupations = load_occupations(&paths.occupations)?;
    let weapons = load_weapons(&paths.weapons)?;
    let augurs = load_augurs(&paths.augurs)?;
    info!(
        occupations = occupations.len(),
        weapons = weapons.len(),
        augurs = augurs.len(),
        "loaded tables"
    );
    Ok(Tables::new(occupations, weapons, augurs))
}

/// Load the occupation table, keeping file order.
pub fn load_occupations(path: &Path) -> Result<OccupationTable, CliError> {
    read_rows::<OccupationRow>(path)?
        .into_iter()
        .map(|row| -> Result<OccupationEntry, CliError> {
            let roll = RollSpec::parse(&row.roll).map_err(|source| CliError::Table {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(OccupationEntry::new(
                roll,
                row.occupation,
                row.trained_weapon,
                row.trade_good,
            ))
        })
        .collect()
}

/// Load the weapon table.
pub fn load_weapons(path: &Path) -> Result<WeaponTable, CliError> {
    let mut table = WeaponTable::new();
    for row in read_rows::<WeaponRow>(path)? {
        table.insert(&row.weapon, WeaponEntry::new(row.damage, row.range));
    }
    Ok(table)
}

/// Load the birth augur table.
pub fn load_augurs(path: &Path) -> Result<BirthAugurTable, CliError> {
    Ok(read_rows::<AugurRow>(path)?
        .into_iter()
        .map(|row| BirthAugurEntry::new(row.d30, row.birth_augur, row.lucky_roll))
        .collect())
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CliError> {
    let text = read_text(path)?;
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes())
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| CliError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

fn read_text(path: &Path) -> Result<String, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode(bytes))
}

/// UTF-8 (BOM stripped) when valid, Latin-1 otherwise.
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => match text.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => text,
        },
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    }
}

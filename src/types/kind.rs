//! Record kinds and their field schemas.
//!
//! Both collections share one record shape: an id, a name, and a fixed set
//! of string attributes. `RecordKind` names those attributes and carries the
//! wording the menu uses for each collection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A descriptive attribute of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// JSON key.
    pub key: &'static str,
    /// Label used in listings.
    pub label: &'static str,
    /// Prompt shown when asking for a value.
    pub hint: &'static str,
}

const ITEM_FIELDS: &[Field] = &[
    Field {
        key: "category",
        label: "Category",
        hint: "Category (weapon, ring, consumable...)",
    },
    Field {
        key: "rarity",
        label: "Rarity",
        hint: "Rarity (common, rare, epic, legendary)",
    },
];

const DRIVER_FIELDS: &[Field] = &[
    Field {
        key: "team",
        label: "Team",
        hint: "Team (Ferrari, Mercedes, Red Bull...)",
    },
    Field {
        key: "nationality",
        label: "Nationality",
        hint: "Nationality",
    },
];

/// Which collection a store holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Game inventory items (category, rarity)
    #[default]
    Item,
    /// Racing drivers (team, nationality)
    Driver,
}

impl RecordKind {
    /// Attribute fields, in display order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Item => ITEM_FIELDS,
            Self::Driver => DRIVER_FIELDS,
        }
    }

    /// Look up a field by its JSON key.
    pub fn field(self, key: &str) -> Option<&'static Field> {
        self.fields().iter().find(|f| f.key == key)
    }

    /// Singular noun for one record.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Driver => "driver",
        }
    }

    /// Capitalized noun, for the start of a sentence.
    pub fn label(self) -> &'static str {
        match self {
            Self::Item => "Item",
            Self::Driver => "Driver",
        }
    }

    /// Plural noun for the collection.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Item => "items",
            Self::Driver => "drivers",
        }
    }

    /// Heading for the menu and listings.
    pub fn title(self) -> &'static str {
        match self {
            Self::Item => "Inventory",
            Self::Driver => "Driver Roster",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Self::Item => "The inventory is empty... like your stamina bar!",
            Self::Driver => "The roster is empty... like a grid without engines!",
        }
    }

    pub fn farewell(self) -> &'static str {
        match self {
            Self::Item => "Leaving the inventory... may the flame guide thee!",
            Self::Driver => "Leaving... lights out and away we go!",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "item" => Ok(Self::Item),
            "driver" => Ok(Self::Driver),
            other => Err(format!("unknown record kind: {}", other)),
        }
    }
}

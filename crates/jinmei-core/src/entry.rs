// Name dictionary record types.
//
// The serde field names match the JMnedict-derived JSON format the
// dictionary is distributed in: entries carry written forms ("k"),
// readings ("r") and translation records ("tr"), each translation a set
// of classification tags ("type"), definition strings ("det") and
// optional cross-references ("cf").

use serde::{Deserialize, Serialize};

/// Classification tag attached to a name translation.
///
/// These are the JMnedict name types in their short wire form; the same
/// strings appear in the dictionary data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameType {
    /// Character (in a film, novel, etc.).
    Char,
    /// Company name.
    Company,
    /// Creature.
    Creat,
    /// Deity.
    Dei,
    /// Document.
    Doc,
    /// Event.
    Ev,
    /// Female given name.
    Fem,
    /// Fiction.
    Fict,
    /// Given name, gender not specified.
    Given,
    /// Group (band, troupe, etc.).
    Group,
    /// Legend.
    Leg,
    /// Male given name.
    Masc,
    /// Mythology.
    Myth,
    /// Object.
    Obj,
    /// Organization.
    Org,
    /// Other.
    Oth,
    /// Full name of a particular person.
    Person,
    /// Place name.
    Place,
    /// Product name.
    Product,
    /// Religion.
    Relig,
    /// Service.
    Serv,
    /// Ship name.
    Ship,
    /// Railway station.
    Station,
    /// Family or surname.
    Surname,
    /// Unclassified name.
    Unclass,
    /// Work of art, literature, music, etc.
    Work,
}

impl NameType {
    /// The short tag name as stored in dictionary data.
    pub fn as_str(self) -> &'static str {
        match self {
            NameType::Char => "char",
            NameType::Company => "company",
            NameType::Creat => "creat",
            NameType::Dei => "dei",
            NameType::Doc => "doc",
            NameType::Ev => "ev",
            NameType::Fem => "fem",
            NameType::Fict => "fict",
            NameType::Given => "given",
            NameType::Group => "group",
            NameType::Leg => "leg",
            NameType::Masc => "masc",
            NameType::Myth => "myth",
            NameType::Obj => "obj",
            NameType::Org => "org",
            NameType::Oth => "oth",
            NameType::Person => "person",
            NameType::Place => "place",
            NameType::Product => "product",
            NameType::Relig => "relig",
            NameType::Serv => "serv",
            NameType::Ship => "ship",
            NameType::Station => "station",
            NameType::Surname => "surname",
            NameType::Unclass => "unclass",
            NameType::Work => "work",
        }
    }

    /// A human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            NameType::Char => "character",
            NameType::Company => "company",
            NameType::Creat => "creature",
            NameType::Dei => "deity",
            NameType::Doc => "document",
            NameType::Ev => "event",
            NameType::Fem => "female given name",
            NameType::Fict => "fiction",
            NameType::Given => "given name",
            NameType::Group => "group",
            NameType::Leg => "legend",
            NameType::Masc => "male given name",
            NameType::Myth => "mythology",
            NameType::Obj => "object",
            NameType::Org => "organization",
            NameType::Oth => "other",
            NameType::Person => "person",
            NameType::Place => "place name",
            NameType::Product => "product name",
            NameType::Relig => "religion",
            NameType::Serv => "service",
            NameType::Ship => "ship name",
            NameType::Station => "railway station",
            NameType::Surname => "surname",
            NameType::Unclass => "unclassified name",
            NameType::Work => "work of art",
        }
    }
}

/// One translation record of a name entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTranslation {
    /// Classification tags. Empty when the data carries none.
    #[serde(rename = "type", default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<NameType>,
    /// Definition strings (romanized forms, English glosses). Non-empty
    /// by data contract.
    #[serde(rename = "det")]
    pub details: Vec<String>,
    /// Cross-references to related entries. Empty when absent.
    #[serde(rename = "cf", default, skip_serializing_if = "Vec::is_empty")]
    pub xrefs: Vec<String>,
}

/// A single name dictionary entry.
///
/// `kanji` is empty for kana-only names. `readings` is non-empty by data
/// contract; the engine does not re-validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    /// Upstream sequence id. Carried through to results but not used for
    /// grouping.
    pub id: u32,
    /// Written (kanji) forms.
    #[serde(rename = "k", default, skip_serializing_if = "Vec::is_empty")]
    pub kanji: Vec<String>,
    /// Kana readings.
    #[serde(rename = "r")]
    pub readings: Vec<String>,
    /// Translation records.
    #[serde(rename = "tr")]
    pub translations: Vec<NameTranslation>,
}

//! Core data types: [`Item`], its vocabularies ([`Room`], [`ItemType`], [`Status`])
//! and the tolerant wire representations the storage format allows.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque item identifier. Kept verbatim when it comes from an import;
/// numeric ids are read as their decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => ItemId(s),
            RawId::Number(n) => ItemId(n.to_string()),
        })
    }
}

impl ItemId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemType {
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "objects", alias = "object")]
    Object,
}

impl ItemType {
    pub const ALL: [ItemType; 2] = [ItemType::Food, ItemType::Object];

    pub fn key(&self) -> &'static str {
        match self {
            ItemType::Food => "food",
            ItemType::Object => "objects",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Food => "🍎 Nourriture",
            ItemType::Object => "🏠 Objets",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(ItemType::Food),
            "objects" | "object" => Ok(ItemType::Object),
            other => Err(format!("Unknown item type: {}", other)),
        }
    }
}

/// The fixed set of rooms. Variant order is the canonical presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Room {
    Cuisine,
    Salon,
    Chambre,
    SalleBain,
    Bureau,
    Garage,
    Cave,
}

impl Room {
    pub const ALL: [Room; 7] = [
        Room::Cuisine,
        Room::Salon,
        Room::Chambre,
        Room::SalleBain,
        Room::Bureau,
        Room::Garage,
        Room::Cave,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Room::Cuisine => "cuisine",
            Room::Salon => "salon",
            Room::Chambre => "chambre",
            Room::SalleBain => "salle-bain",
            Room::Bureau => "bureau",
            Room::Garage => "garage",
            Room::Cave => "cave",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Room::Cuisine => "🍳 Cuisine",
            Room::Salon => "🛋️ Salon",
            Room::Chambre => "🛏️ Chambre",
            Room::SalleBain => "🛁 Salle de bain",
            Room::Bureau => "💼 Bureau",
            Room::Garage => "🔧 Garage",
            Room::Cave => "🍷 Cave",
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Room {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Room::ALL
            .into_iter()
            .find(|room| room.key() == wanted)
            .ok_or_else(|| format!("Unknown room: {}", s))
    }
}

/// Room as found on a stored record: one of the known rooms, or whatever
/// string an imported record carried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoomKey {
    Known(Room),
    Unknown(String),
}

impl RoomKey {
    pub fn room(&self) -> Option<Room> {
        match self {
            RoomKey::Known(room) => Some(*room),
            RoomKey::Unknown(_) => None,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            RoomKey::Known(room) => room.key(),
            RoomKey::Unknown(raw) => raw,
        }
    }

    /// Display label; unrecognized rooms show their raw key.
    pub fn label(&self) -> &str {
        match self {
            RoomKey::Known(room) => room.label(),
            RoomKey::Unknown(raw) => raw,
        }
    }
}

impl From<Room> for RoomKey {
    fn from(room: Room) -> Self {
        RoomKey::Known(room)
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Freshness of an item. Derived, never chosen by a caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Fresh,
    Expiring,
    Expired,
}

impl Status {
    pub fn key(&self) -> &'static str {
        match self {
            Status::Fresh => "fresh",
            Status::Expiring => "expiring",
            Status::Expired => "expired",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fresh" => Ok(Status::Fresh),
            "expiring" => Ok(Status::Expiring),
            "expired" => Ok(Status::Expired),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

/// Quantity or threshold exactly as written on the record.
///
/// Both `"3"` and `3` are valid on the wire. The original value is kept so an
/// export returns what was stored; [`Amount::parse`] gives the integer view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(serde_json::Number),
    Text(String),
}

impl Amount {
    /// Leading-integer parse: `" 12kg"` is 12, `"3.9"` is 3, `"abc"` and `""`
    /// are `None`. Numbers are truncated toward zero.
    pub fn parse(&self) -> Option<i64> {
        match self {
            Amount::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            }),
            Amount::Text(raw) => parse_leading_int(raw),
        }
    }
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    format!("{}{}", sign, digits).parse().ok()
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::Number(value.into())
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Amount::Text(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => write!(f, "{}", n),
            Amount::Text(s) => f.write_str(s),
        }
    }
}

// Blank strings were how empty date inputs got stored.
fn deserialize_expiry<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

// Status is recomputed on every write, so an unreadable one is not an error.
fn deserialize_status<'de, D>(deserializer: D) -> Result<Status, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(raw)) => raw.parse().unwrap_or_default(),
        _ => Status::default(),
    })
}

/// One inventory record, in its persisted shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub room: RoomKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Amount>,
    #[serde(
        default,
        deserialize_with = "deserialize_expiry",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: Status,
}

impl Item {
    pub fn from_draft(id: ItemId, draft: ItemDraft, status: Status) -> Self {
        Self {
            id,
            name: draft.name,
            item_type: draft.item_type,
            room: draft.room,
            quantity: draft.quantity,
            threshold: draft.threshold,
            expiry: draft.expiry,
            photo: draft.photo,
            location: draft.location,
            notes: draft.notes,
            barcode: draft.barcode,
            status,
        }
    }

    /// The caller-editable part of this item.
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            name: self.name.clone(),
            item_type: self.item_type,
            room: self.room.clone(),
            quantity: self.quantity.clone(),
            threshold: self.threshold.clone(),
            expiry: self.expiry,
            photo: self.photo.clone(),
            location: self.location.clone(),
            notes: self.notes.clone(),
            barcode: self.barcode.clone(),
        }
    }
}

/// Everything a caller supplies when adding or editing an item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub item_type: ItemType,
    pub room: RoomKey,
    pub quantity: Option<Amount>,
    pub threshold: Option<Amount>,
    pub expiry: Option<NaiveDate>,
    pub photo: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub barcode: Option<String>,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, item_type: ItemType, room: impl Into<RoomKey>) -> Self {
        Self {
            name: name.into(),
            item_type,
            room: room.into(),
            quantity: None,
            threshold: None,
            expiry: None,
            photo: None,
            location: None,
            notes: None,
            barcode: None,
        }
    }

    pub fn with_quantity(mut self, quantity: impl Into<Amount>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn with_threshold(mut self, threshold: impl Into<Amount>) -> Self {
        self.threshold = Some(threshold.into());
        self
    }

    pub fn with_expiry(mut self, expiry: NaiveDate) -> Self {
        self.expiry = Some(expiry);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }
}

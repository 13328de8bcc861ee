use serde::Serialize;

/// A single selectable vocabulary item shown to an AAC app user.
///
/// Only valid with a non-empty trimmed `name`; construction goes through
/// the reply parser, which enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub name: String,
    pub emoji: String,
}

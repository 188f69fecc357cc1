use serde::Serialize;

/// The sole persisted domain entity: a named row in the `items` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: i64,     // ⇔ items.id (INTEGER PRIMARY KEY AUTOINCREMENT)
    pub name: String, // ⇔ items.name (TEXT, stored raw, never trimmed)
}

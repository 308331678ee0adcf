use super::cursor::Cursor;
use crate::designator::DesignatorAssigner;
use crate::types::{Cell, PositionedKey, RawLayout, Row};

/// Walks a layout row by row, cell by cell, emitting one key per label.
pub struct LayoutParser {
    assigner: DesignatorAssigner,
}

impl LayoutParser {
    pub fn new() -> Self {
        Self {
            assigner: DesignatorAssigner::new(),
        }
    }

    pub fn parse(mut self, layout: &RawLayout) -> Vec<PositionedKey> {
        let (_, keys) = layout
            .rows
            .iter()
            .fold((Cursor::new(), Vec::new()), |(cursor, keys), row| {
                let (cursor, keys) = self.parse_row(cursor, keys, row);
                (cursor.next_row(), keys)
            });

        log::info!(
            "Parsed {} keys from {} rows ({} ordinal names)",
            keys.len(),
            layout.rows.len(),
            self.assigner.ordinals_used()
        );
        keys
    }

    fn parse_row(
        &mut self,
        cursor: Cursor,
        keys: Vec<PositionedKey>,
        row: &Row,
    ) -> (Cursor, Vec<PositionedKey>) {
        log::debug!("Row {} starts at y={}", cursor.row, cursor.y);

        row.iter()
            .fold((cursor, keys), |(cursor, mut keys), cell| match cell {
                Cell::Modifier(modifier) => (cursor.apply(modifier), keys),
                Cell::Label(text) => {
                    let name = self.assigner.assign(text);
                    let key = cursor.key(name, text);
                    log::trace!(
                        "{} at ({:.3}, {:.3}) row={} col={}",
                        key.name,
                        key.x,
                        key.y,
                        key.row,
                        key.col
                    );
                    keys.push(key);
                    (cursor.advance(), keys)
                }
            })
    }
}

impl Default for LayoutParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a layout with a fresh assigner.
pub fn parse_layout(layout: &RawLayout) -> Vec<PositionedKey> {
    LayoutParser::new().parse(layout)
}

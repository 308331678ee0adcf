use crate::types::{KleError, Point, PositionedKey, Result};

/// Extent of a set of keys, edges included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Fails with `EmptyLayout` when there are no keys.
    pub fn of(keys: &[PositionedKey]) -> Result<Self> {
        let (first, rest) = keys.split_first().ok_or(KleError::EmptyLayout)?;

        let start = Bounds {
            min_x: first.left(),
            max_x: first.right(),
            min_y: first.bottom(),
            max_y: first.top(),
        };

        Ok(rest.iter().fold(start, |b, key| Bounds {
            min_x: b.min_x.min(key.left()),
            max_x: b.max_x.max(key.right()),
            min_y: b.min_y.min(key.bottom()),
            max_y: b.max_y.max(key.top()),
        }))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Offset to subtract from every key to centre the layout on the origin.
    pub fn center_offset(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

/// Recentres keys so the layout's bounding box is centred on the origin.
pub fn normalize(keys: &[PositionedKey]) -> Result<Vec<PositionedKey>> {
    let offset = Bounds::of(keys)?.center_offset();
    log::debug!("Centering offset ({:.3}, {:.3})", offset.x, offset.y);

    Ok(keys
        .iter()
        .map(|key| key.shifted_back(offset.x, offset.y))
        .collect())
}

use std::collections::BTreeMap;
use std::fmt;

use super::{Axis, Direction, Position};

/// Rendering tag attached to each blast cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlastTag {
    /// The detonating bomb's own cell.
    Center,
    /// A cell the blast passes through along an axis.
    Traversal(Axis),
    /// Last cell of the ray in a direction.
    Tip(Direction),
}

impl BlastTag {
    /// Glyph clients draw for this tag (`+`, `-`, `|`, `^`, `v`, `<`, `>`).
    pub fn symbol(self) -> &'static str {
        match self {
            BlastTag::Center => "+",
            BlastTag::Traversal(axis) => axis.into(),
            BlastTag::Tip(direction) => direction.into(),
        }
    }
}

impl fmt::Display for BlastTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Cells touched by one detonation, grouped by ray.
///
/// Each ray is stored in order of distance from the center. The last cell of a
/// non-empty ray is its tip; the others are traversal cells.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplosionGeometry {
    center: Position,
    rays: BTreeMap<Direction, Vec<Position>>,
    destroyed: Vec<Position>,
}

impl ExplosionGeometry {
    pub fn new(center: Position) -> Self {
        Self {
            center,
            rays: BTreeMap::new(),
            destroyed: Vec::new(),
        }
    }

    pub(crate) fn set_ray(&mut self, direction: Direction, cells: Vec<Position>) {
        if cells.is_empty() {
            self.rays.remove(&direction);
        } else {
            self.rays.insert(direction, cells);
        }
    }

    pub(crate) fn mark_destroyed(&mut self, position: Position) {
        if !self.destroyed.contains(&position) {
            self.destroyed.push(position);
        }
    }

    pub fn center(&self) -> Position {
        self.center
    }

    /// Full ray in `direction`, tip included. Empty when blocked immediately.
    pub fn ray(&self, direction: Direction) -> &[Position] {
        self.rays.get(&direction).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn tip(&self, direction: Direction) -> Option<Position> {
        self.ray(direction).last().copied()
    }

    /// Traversal cells of both rays on `axis`, tips excluded.
    ///
    /// Row axis lists the right ray then the left ray; column axis lists the
    /// down ray then the up ray.
    pub fn traversed(&self, axis: Axis) -> Vec<Position> {
        let (forward, backward) = match axis {
            Axis::Row => (Direction::Right, Direction::Left),
            Axis::Column => (Direction::Down, Direction::Up),
        };
        [forward, backward]
            .into_iter()
            .flat_map(|direction| {
                let ray = self.ray(direction);
                ray[..ray.len().saturating_sub(1)].iter().copied()
            })
            .collect()
    }

    /// Destructible cells the blast reached.
    pub fn destroyed(&self) -> &[Position] {
        &self.destroyed
    }

    /// Every affected cell, center first.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.center).chain(self.rays.values().flatten().copied())
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells().any(|cell| cell == position)
    }

    /// Every affected cell paired with its rendering tag.
    pub fn tagged(&self) -> Vec<(BlastTag, Position)> {
        let mut tagged = vec![(BlastTag::Center, self.center)];
        for axis in [Axis::Row, Axis::Column] {
            tagged.extend(
                self.traversed(axis)
                    .into_iter()
                    .map(|position| (BlastTag::Traversal(axis), position)),
            );
        }
        for direction in [
            Direction::Right,
            Direction::Left,
            Direction::Down,
            Direction::Up,
        ] {
            if let Some(tip) = self.tip(direction) {
                tagged.push((BlastTag::Tip(direction), tip));
            }
        }
        tagged
    }
}

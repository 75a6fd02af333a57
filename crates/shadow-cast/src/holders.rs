//! Binding pass output to externally owned 2D shape holders.
//!
//! A consumer such as a 2D collision world keeps one shape object per output
//! polygon. Holders are reused by position: after a pass, holder `k` carries
//! polygon `k` of that pass, missing holders are created, and surplus ones
//! are dropped.

use nalgebra::Point2;

use crate::Polygon2;

/// Resizing needed to go from `current` holders to `desired` holders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    /// Create this many holders at the end.
    Grow(usize),
    /// Drop this many trailing holders.
    Truncate(usize),
    /// Counts already match.
    Keep,
}

/// Compares holder counts.
pub fn reconcile(current: usize, desired: usize) -> Reconcile {
    match desired.cmp(&current) {
        std::cmp::Ordering::Greater => Reconcile::Grow(desired - current),
        std::cmp::Ordering::Less => Reconcile::Truncate(current - desired),
        std::cmp::Ordering::Equal => Reconcile::Keep,
    }
}

/// A shape object that can carry one polygon path.
pub trait ShapeHolder {
    /// Replaces the holder's path.
    fn set_path(&mut self, path: &[Point2<f32>]);
}

/// Minimal holder storing the last path it was given.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathHolder {
    /// Position of the holder when it was created.
    pub id: usize,
    path: Vec<Point2<f32>>,
}

impl PathHolder {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            path: Vec::new(),
        }
    }

    #[inline]
    pub fn path(&self) -> &[Point2<f32>] {
        &self.path
    }
}

impl ShapeHolder for PathHolder {
    fn set_path(&mut self, path: &[Point2<f32>]) {
        self.path.clear();
        self.path.extend_from_slice(path);
    }
}

/// A positional array of shape holders.
#[derive(Debug, Clone, Default)]
pub struct ShapeHolders<H> {
    holders: Vec<H>,
}

impl<H: ShapeHolder> ShapeHolders<H> {
    pub fn new() -> Self {
        Self {
            holders: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.holders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[H] {
        &self.holders
    }

    /// Assigns `polygons[k]` to holder `k`.
    ///
    /// Missing holders are built with `create(k)`; holders past the end of
    /// `polygons` are dropped. Returns the resize that was applied.
    pub fn bind<F>(&mut self, polygons: &[Polygon2], mut create: F) -> Reconcile
    where
        F: FnMut(usize) -> H,
    {
        let change = reconcile(self.holders.len(), polygons.len());
        match change {
            Reconcile::Grow(_) => {
                let start = self.holders.len();
                self.holders.extend((start..polygons.len()).map(&mut create));
            }
            Reconcile::Truncate(_) => self.holders.truncate(polygons.len()),
            Reconcile::Keep => {}
        }

        for (holder, polygon) in self.holders.iter_mut().zip(polygons) {
            holder.set_path(polygon.vertices());
        }
        change
    }
}

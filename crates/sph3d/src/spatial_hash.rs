//! Uniform spatial hash over the domain for accelerated neighbor queries.
//!
//! Optional drop-in replacement for the brute-force all-pairs loops: bucket
//! particles by position, query only the 3x3x3 cell neighborhood. For a cell
//! size of at least the interaction radius the query visits every in-range
//! pair, so the solver produces the same pair set as brute force (summation
//! order, and therefore the last few float bits, may differ).
//!
//! Buckets use the linked-list layout: `heads[cell]` is the first particle in
//! a cell, `next[particle]` chains the rest. Rebuilding is two flat passes
//! with no per-cell allocation.

use glam::Vec3;

use crate::params::Domain;

pub struct SpatialHash {
    cell_size: f32,
    origin: Vec3,
    dims: [usize; 3],
    heads: Vec<i32>,
    next: Vec<i32>,
}

impl SpatialHash {
    /// Build an empty hash covering `domain` with the given bucket size.
    ///
    /// `cell_size` must be positive and at least the interaction radius for
    /// neighbor queries to be exhaustive.
    pub fn new(domain: &Domain, cell_size: f32) -> Self {
        debug_assert!(cell_size > 0.0, "cell_size must be positive");
        let extent = domain.max - domain.min;
        let dims = [
            (extent.x / cell_size).ceil().max(1.0) as usize,
            (extent.y / cell_size).ceil().max(1.0) as usize,
            (extent.z / cell_size).ceil().max(1.0) as usize,
        ];
        Self {
            cell_size,
            origin: domain.min,
            dims,
            heads: vec![-1; dims[0] * dims[1] * dims[2]],
            next: Vec::new(),
        }
    }

    /// Re-bucket all particles. Positions outside the domain fall into the
    /// nearest edge cell, so every particle is always queryable.
    pub fn rebuild(&mut self, positions: &[Vec3]) {
        self.heads.fill(-1);
        self.next.clear();
        self.next.resize(positions.len(), -1);

        for (i, &pos) in positions.iter().enumerate() {
            let (cx, cy, cz) = self.cell_coords(pos);
            let cell = self.cell_index(cx, cy, cz);
            self.next[i] = self.heads[cell];
            self.heads[cell] = i as i32;
        }
    }

    /// Visit every particle bucketed in the 3x3x3 neighborhood around `pos`.
    ///
    /// Candidates are a superset of the in-range neighbors; callers re-check
    /// the actual distance, exactly as the brute-force loops do.
    pub fn for_each_candidate(&self, pos: Vec3, mut f: impl FnMut(usize)) {
        let (cx, cy, cz) = self.cell_coords(pos);
        for dz in -1i64..=1 {
            for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    let nx = cx as i64 + dx;
                    let ny = cy as i64 + dy;
                    let nz = cz as i64 + dz;
                    if nx < 0
                        || ny < 0
                        || nz < 0
                        || nx >= self.dims[0] as i64
                        || ny >= self.dims[1] as i64
                        || nz >= self.dims[2] as i64
                    {
                        continue;
                    }
                    let cell = self.cell_index(nx as usize, ny as usize, nz as usize);
                    let mut j = self.heads[cell];
                    while j != -1 {
                        f(j as usize);
                        j = self.next[j as usize];
                    }
                }
            }
        }
    }

    /// Bucket edge length this hash was built with.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    fn cell_coords(&self, pos: Vec3) -> (usize, usize, usize) {
        let local = pos - self.origin;
        let cx = ((local.x / self.cell_size) as i64).clamp(0, self.dims[0] as i64 - 1);
        let cy = ((local.y / self.cell_size) as i64).clamp(0, self.dims[1] as i64 - 1);
        let cz = ((local.z / self.cell_size) as i64).clamp(0, self.dims[2] as i64 - 1);
        (cx as usize, cy as usize, cz as usize)
    }

    #[inline]
    fn cell_index(&self, cx: usize, cy: usize, cz: usize) -> usize {
        (cz * self.dims[1] + cy) * self.dims[0] + cx
    }
}

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tiles along a geographic path
//!
//! Every segment of the path is rasterized with Bresenham's line algorithm on
//! the tile grid of one level. Each line cell is widened to a square
//! neighbourhood of `2 * area_offset + 1` tiles per side.

use crate::coordinates::GeoCoordinates;
use crate::tiling::tile_key_utils;
use crate::tiling::TilingScheme;
use std::collections::{HashSet, VecDeque};
use std::mem;
use std::sync::Arc;
use tile_key::TileKey;

/// Start and end point of a path segment
pub type GeoSegment = (GeoCoordinates, GeoCoordinates);

/// Consecutive segments of a path given by its vertices.
///
/// A path with a single vertex yields one segment starting and ending at
/// that vertex.
pub struct PathSegments<I: Iterator<Item = GeoCoordinates>> {
    vertices: I,
    previous: Option<GeoCoordinates>,
}

impl<I: Iterator<Item = GeoCoordinates>> PathSegments<I> {
    pub fn new<P>(vertices: P) -> PathSegments<I>
    where
        P: IntoIterator<Item = GeoCoordinates, IntoIter = I>,
    {
        PathSegments {
            vertices: vertices.into_iter(),
            previous: None,
        }
    }
}

impl<I: Iterator<Item = GeoCoordinates>> Iterator for PathSegments<I> {
    type Item = GeoSegment;

    fn next(&mut self) -> Option<GeoSegment> {
        let start = match self.previous {
            Some(previous) => previous,
            None => {
                let first = self.vertices.next()?;
                self.previous = Some(first);
                if let Some(second) = self.vertices.next() {
                    self.previous = Some(second);
                    return Some((first, second));
                }
                return Some((first, first));
            }
        };
        let end = self.vertices.next()?;
        self.previous = Some(end);
        Some((start, end))
    }
}

/// Parameters of a path tiling run
#[derive(PartialEq, Clone, Debug)]
pub struct PathTilingOptions {
    /// Tile level
    pub level: u32,
    /// Number of neighbour tiles added on every side of the line
    pub area_offset: u32,
}

/// Bresenham line over tile columns (x) and rows (y) with a square
/// neighbourhood walk around every line cell.
///
/// Lines are always walked with increasing x. Steep lines are walked with
/// swapped axes and swapped back on output.
#[derive(Debug)]
struct BresenhamLine {
    x_end: i64,
    steep: bool,
    radius: i64,
    delta_x: i64,
    delta_y: i64,
    y_step: i64,
    x: i64,
    y: i64,
    error: i64,
    // neighbourhood offsets
    a: i64,
    b: i64,
}

impl BresenhamLine {
    fn new(start: (i64, i64), end: (i64, i64), radius: i64) -> BresenhamLine {
        let (mut x0, mut y0) = start;
        let (mut x1, mut y1) = end;
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            mem::swap(&mut x0, &mut y0);
            mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            mem::swap(&mut x0, &mut x1);
            mem::swap(&mut y0, &mut y1);
        }
        BresenhamLine {
            x_end: x1,
            steep,
            radius,
            delta_x: x1 - x0,
            delta_y: (y1 - y0).abs(),
            y_step: if y0 > y1 { -1 } else { 1 },
            x: x0,
            y: y0,
            error: 0,
            a: -radius,
            b: -radius,
        }
    }
}

impl Iterator for BresenhamLine {
    /// Unwrapped `(column, row)`
    type Item = (i64, i64);

    fn next(&mut self) -> Option<(i64, i64)> {
        if self.x > self.x_end {
            return None;
        }
        let cell = (self.x + self.a, self.y + self.b);

        self.b += 1;
        if self.b > self.radius {
            self.b = -self.radius;
            self.a += 1;
            if self.a > self.radius {
                self.a = -self.radius;
                self.error += self.delta_y;
                if 2 * self.error >= self.delta_x {
                    self.y += self.y_step;
                    self.error -= self.delta_x;
                }
                self.x += 1;
            }
        }

        if self.steep {
            Some((cell.1, cell.0))
        } else {
            Some(cell)
        }
    }
}

/// Lazy sequence of the tiles touched by a path.
///
/// The sequence doesn't repeat tiles of the current and the previous segment.
/// Tiles of older segments are forgotten once more than `5 * area_offset^2`
/// tiles are remembered, so a path coming back to an area visited several
/// segments before emits those tiles again.
pub struct PathTilingGenerator<I: Iterator<Item = GeoSegment>> {
    segments: I,
    tiling_scheme: Arc<TilingScheme>,
    level: u32,
    area_offset: u32,
    line: Option<BresenhamLine>,
    // number of segments walked so far
    segment: usize,
    visited: HashSet<u64>,
    // emitted tiles with their segment number, oldest first
    visited_queue: VecDeque<(u64, usize)>,
}

impl<I: Iterator<Item = GeoSegment>> PathTilingGenerator<I> {
    pub fn new<S>(
        segments: S,
        tiling_scheme: Arc<TilingScheme>,
        level: u32,
        area_offset: u32,
    ) -> PathTilingGenerator<I>
    where
        S: IntoIterator<Item = GeoSegment, IntoIter = I>,
    {
        PathTilingGenerator {
            segments: segments.into_iter(),
            tiling_scheme,
            level,
            area_offset,
            line: None,
            segment: 0,
            visited: HashSet::new(),
            visited_queue: VecDeque::new(),
        }
    }

    pub fn with_options<S>(
        segments: S,
        tiling_scheme: Arc<TilingScheme>,
        options: &PathTilingOptions,
    ) -> PathTilingGenerator<I>
    where
        S: IntoIterator<Item = GeoSegment, IntoIter = I>,
    {
        PathTilingGenerator::new(segments, tiling_scheme, options.level, options.area_offset)
    }

    /// Line of the next segment with valid end tiles
    fn next_line(&mut self) -> Option<BresenhamLine> {
        loop {
            let (start, end) = self.segments.next()?;
            let start_key =
                tile_key_utils::geo_coordinates_to_tile_key(&self.tiling_scheme, &start, self.level);
            let end_key =
                tile_key_utils::geo_coordinates_to_tile_key(&self.tiling_scheme, &end, self.level);
            if !start_key.is_valid() || !end_key.is_valid() {
                debug!(
                    "Skipping segment {} - {}: no tile at level {}",
                    start, end, self.level
                );
                continue;
            }
            trace!("Next segment {} - {}", start_key, end_key);
            self.segment += 1;
            self.forget_old_segments();
            return Some(BresenhamLine::new(
                (start_key.column() as i64, start_key.row() as i64),
                (end_key.column() as i64, end_key.row() as i64),
                self.area_offset as i64,
            ));
        }
    }

    /// Drop tiles of segments before the previous one beyond the capacity
    fn forget_old_segments(&mut self) {
        let capacity = 5 * self.area_offset as usize * self.area_offset as usize;
        while self.visited_queue.len() > capacity {
            match self.visited_queue.front() {
                Some(&(quad_key, segment)) if segment + 1 < self.segment => {
                    self.visited.remove(&quad_key);
                    self.visited_queue.pop_front();
                }
                _ => break,
            }
        }
    }

    fn remember(&mut self, quad_key: u64) {
        self.visited.insert(quad_key);
        self.visited_queue.push_back((quad_key, self.segment));
    }
}

impl<I: Iterator<Item = GeoSegment>> Iterator for PathTilingGenerator<I> {
    type Item = TileKey;

    fn next(&mut self) -> Option<TileKey> {
        let level_size = self
            .tiling_scheme
            .subdivision_scheme()
            .level_size(self.level);
        let columns = level_size.width.max(1) as i64;
        let rows = level_size.height.max(1) as i64;
        loop {
            if self.line.is_none() {
                self.line = Some(self.next_line()?);
            }
            let cell = self.line.as_mut().and_then(|line| line.next());
            let (column, row) = match cell {
                Some(cell) => cell,
                None => {
                    self.line = None;
                    continue;
                }
            };
            let tile = TileKey::from_row_column_level(
                row.rem_euclid(rows) as u32,
                column.rem_euclid(columns) as u32,
                self.level,
            );
            let quad_key = tile.to_quad_key64();
            if self.visited.contains(&quad_key) {
                continue;
            }
            self.remember(quad_key);
            return Some(tile);
        }
    }
}

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use std::ops::{Add, Div, Mul, Sub};

#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct Vector3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3d {
    pub fn new(x: f64, y: f64, z: f64) -> Vector3d {
        Vector3d { x, y, z }
    }
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Add for Vector3d {
    type Output = Vector3d;

    fn add(self, other: Vector3d) -> Vector3d {
        Vector3d::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3d {
    type Output = Vector3d;

    fn sub(self, other: Vector3d) -> Vector3d {
        Vector3d::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector3d {
    type Output = Vector3d;

    fn mul(self, factor: f64) -> Vector3d {
        Vector3d::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl Div<f64> for Vector3d {
    type Output = Vector3d;

    fn div(self, divisor: f64) -> Vector3d {
        Vector3d::new(self.x / divisor, self.y / divisor, self.z / divisor)
    }
}

/// Axis aligned box in world space
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct AlignedBox3d {
    pub minimum: Vector3d,
    pub maximum: Vector3d,
}

impl AlignedBox3d {
    pub fn new(minimum: Vector3d, maximum: Vector3d) -> AlignedBox3d {
        AlignedBox3d { minimum, maximum }
    }
    pub fn is_empty(&self) -> bool {
        self.minimum.x > self.maximum.x
            || self.minimum.y > self.maximum.y
            || self.minimum.z > self.maximum.z
    }
    pub fn size(&self) -> Vector3d {
        self.maximum - self.minimum
    }
    pub fn center(&self) -> Vector3d {
        (self.minimum + self.maximum) / 2.0
    }
    /// Point inside the box, boundaries included
    pub fn contains(&self, point: &Vector3d) -> bool {
        point.x >= self.minimum.x
            && point.x <= self.maximum.x
            && point.y >= self.minimum.y
            && point.y <= self.maximum.y
            && point.z >= self.minimum.z
            && point.z <= self.maximum.z
    }
}

/// Number of columns (width) and rows (height)
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Size2u {
    pub width: u32,
    pub height: u32,
}

impl Size2u {
    pub fn new(width: u32, height: u32) -> Size2u {
        Size2u { width, height }
    }
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

#[test]
fn test_aligned_box() {
    let bbox = AlignedBox3d::new(Vector3d::new(0.0, 0.0, -1.0), Vector3d::new(1.0, 0.5, 1.0));
    assert!(!bbox.is_empty());
    assert_eq!(bbox.size(), Vector3d::new(1.0, 0.5, 2.0));
    assert_eq!(bbox.center(), Vector3d::new(0.5, 0.25, 0.0));
    assert!(bbox.contains(&Vector3d::new(1.0, 0.5, 1.0)));
    assert!(bbox.contains(&Vector3d::new(0.0, 0.0, 0.0)));
    assert!(!bbox.contains(&Vector3d::new(0.0, 0.6, 0.0)));

    let empty = AlignedBox3d::new(Vector3d::new(1.0, 0.0, 0.0), Vector3d::new(0.0, 0.0, 0.0));
    assert!(empty.is_empty());
}

#[test]
fn test_size() {
    assert_eq!(Size2u::new(2, 1).area(), 2);
    assert_eq!(Size2u::new(1 << 31, 1 << 31).area(), 1 << 62);
}

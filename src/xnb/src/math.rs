//! XNA math and color value types.
//!
//! The fixed-layout records that appear in decoded content: vectors,
//! bounding volumes, and four-channel colors. Values are built in one step
//! from already-decoded data, never mutated afterwards, and compare
//! structurally. Composites own their nested values by copy.

use std::str::FromStr;

use thiserror::Error;

/// Errors raised by value construction and string parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("Invalid color string: '{0}'")]
    InvalidColorFormat(String),

    #[error("Invalid matrix: expected 16 values, got {0}")]
    InvalidMatrixShape(usize),
}

/// Four-channel 8-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Pack into the 32-bit channel layout used by content streams:
    /// red in the low byte, alpha in the high byte
    pub fn to_packed(self) -> u32 {
        u32::from(self.r)
            | u32::from(self.g) << 8
            | u32::from(self.b) << 16
            | u32::from(self.a) << 24
    }

    /// Inverse of [`Color::to_packed`]
    pub fn from_packed(data: u32) -> Self {
        Color {
            r: (data & 0xff) as u8,
            g: (data >> 8 & 0xff) as u8,
            b: (data >> 16 & 0xff) as u8,
            a: (data >> 24 & 0xff) as u8,
        }
    }

    /// Render as `#AARRGGBB`, two uppercase hex digits per channel
    pub fn hex_string(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ValueError;

    /// Parse `RRGGBB` or `AARRGGBB`, with an optional `#` prefix.
    ///
    /// Six digits get an implicit `ff` alpha prepended. Channel order in
    /// the string is alpha,red,green,blue regardless of field order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clean = s.strip_prefix('#').unwrap_or(s);
        let clean = match clean.len() {
            6 => format!("ff{clean}"),
            8 => clean.to_string(),
            _ => return Err(ValueError::InvalidColorFormat(s.to_string())),
        };
        let bytes =
            hex::decode(&clean).map_err(|_| ValueError::InvalidColorFormat(s.to_string()))?;
        Ok(Color {
            r: bytes[1],
            g: bytes[2],
            b: bytes[3],
            a: bytes[0],
        })
    }
}

/// Axis-aligned integer rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rectangle { x, y, w, h }
    }
}

/// Integer screen point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Quaternion { x, y, z, w }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Vector4 { x, y, z, w }
    }
}

/// Plane in normal-distance form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vector3,
    pub d: f32,
}

impl Plane {
    pub fn new(normal: Vector3, d: f32) -> Self {
        Plane { normal, d }
    }
}

/// Axis-aligned box given by two corners. `min` is not required to be
/// componentwise below `max`; decoded data is stored as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vector3,
    pub max: Vector3,
}

impl BoundingBox {
    pub fn new(min: Vector3, max: Vector3) -> Self {
        BoundingBox { min, max }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Vector3,
    pub radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Vector3, radius: f32) -> Self {
        BoundingSphere { center, radius }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub pos: Vector3,
    pub dir: Vector3,
}

impl Ray {
    pub fn new(pos: Vector3, dir: Vector3) -> Self {
        Ray { pos, dir }
    }
}

/// 4x4 matrix as a flat run of 16 cells in stream order
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    value: [f32; 16],
}

impl Matrix {
    /// Build from exactly 16 cells; any other length is rejected.
    /// Cell values themselves are not validated (non-finite allowed).
    pub fn new(value: &[f32]) -> Result<Self, ValueError> {
        let value: [f32; 16] = value
            .try_into()
            .map_err(|_| ValueError::InvalidMatrixShape(value.len()))?;
        Ok(Matrix { value })
    }

    /// Cells in the order they were supplied
    pub fn values(&self) -> &[f32; 16] {
        &self.value
    }
}

/// View frustum carried as its defining matrix
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingFrustum {
    pub v: Matrix,
}

impl BoundingFrustum {
    pub fn new(v: Matrix) -> Self {
        BoundingFrustum { v }
    }
}

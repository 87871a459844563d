use core::fmt;

use bytemuck::{Pod, Zeroable};

use crate::coords::{ColorRgba, Vec2};

/// A concrete vertex record stored by [`VertexBuffer`](super::VertexBuffer).
///
/// The `HAS_*` flags advertise which properties the layout carries; accessors for
/// properties a layout lacks return neutral values and setters ignore their input.
/// `update` only copies properties that both sides advertise.
pub trait VertexLayout: Pod + Default + fmt::Debug + 'static {
    const HAS_POSITION: bool = false;
    const HAS_COLOR: bool = false;
    const HAS_PICTURE: bool = false;

    #[inline]
    fn position(&self) -> Vec2 {
        Vec2::zero()
    }

    #[inline]
    fn set_position(&mut self, _position: Vec2) {}

    #[inline]
    fn color(&self) -> ColorRgba {
        ColorRgba::white()
    }

    #[inline]
    fn set_color(&mut self, _color: ColorRgba) {}

    /// Texture coordinate and intensity.
    #[inline]
    fn picture(&self) -> (Vec2, f32) {
        (Vec2::zero(), 0.0)
    }

    #[inline]
    fn set_picture(&mut self, _coord: Vec2, _intensity: f32) {}
}

// ── full vertex ───────────────────────────────────────────────────────────

/// Vertex carrying every property: position, color, texture coordinate, intensity.
///
/// `intensity` blends flat color (0) with the texture sample (1).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec2,
    pub color: ColorRgba,
    pub picture: Vec2,
    pub intensity: f32,
}

impl Default for Vertex {
    #[inline]
    fn default() -> Self {
        Self {
            position: Vec2::zero(),
            color: ColorRgba::white(),
            picture: Vec2::zero(),
            intensity: 0.0,
        }
    }
}

impl VertexLayout for Vertex {
    const HAS_POSITION: bool = true;
    const HAS_COLOR: bool = true;
    const HAS_PICTURE: bool = true;

    #[inline]
    fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    #[inline]
    fn color(&self) -> ColorRgba {
        self.color
    }

    #[inline]
    fn set_color(&mut self, color: ColorRgba) {
        self.color = color;
    }

    #[inline]
    fn picture(&self) -> (Vec2, f32) {
        (self.picture, self.intensity)
    }

    #[inline]
    fn set_picture(&mut self, coord: Vec2, intensity: f32) {
        self.picture = coord;
        self.intensity = intensity;
    }
}

// ── colored vertex ────────────────────────────────────────────────────────

/// Untextured vertex: position and color only.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: Vec2,
    pub color: ColorRgba,
}

impl Default for ColorVertex {
    #[inline]
    fn default() -> Self {
        Self { position: Vec2::zero(), color: ColorRgba::white() }
    }
}

impl VertexLayout for ColorVertex {
    const HAS_POSITION: bool = true;
    const HAS_COLOR: bool = true;

    #[inline]
    fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    #[inline]
    fn color(&self) -> ColorRgba {
        self.color
    }

    #[inline]
    fn set_color(&mut self, color: ColorRgba) {
        self.color = color;
    }
}

// ── position-only vertex ──────────────────────────────────────────────────

/// Bare position, e.g. for stencil or outline geometry.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct PositionVertex {
    pub position: Vec2,
}

impl VertexLayout for PositionVertex {
    const HAS_POSITION: bool = true;

    #[inline]
    fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}

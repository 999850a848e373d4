//! In-memory quad mesh for curtain panels.
//!
//! Holds positions and texture coordinates in the vertex layout a renderer
//! would upload, plus the render-state a panel surface exposes.

use crate::animation::uv::UNIT_QUAD_UVS;
use crate::animation::{PanelAnimator, QuadMesh, QuadUvs, SlideDirection};
use crate::curtain::PanelSurface;

/// Vertex with position and texture coordinates.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    /// Position in local space
    pub position: [f32; 2],
    /// Texture coordinates
    pub uv: [f32; 2],
}

#[derive(Clone, Debug)]
pub struct Quad {
    positions: [[f32; 2]; 4],
    uvs: QuadUvs,
    active: bool,
    sorting_layer: String,
    sorting_order: i32,
}

impl Quad {
    /// Quad spanning `[x, x + width] x [y, y + height]` showing its texture once
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            positions: [
                [x, y],
                [x, y + height],
                [x + width, y],
                [x + width, y + height],
            ],
            uvs: UNIT_QUAD_UVS,
            active: true,
            sorting_layer: "Default".to_string(),
            sorting_order: 0,
        }
    }

    /// Unit quad centered on the origin
    pub fn unit() -> Self {
        Self::new(-0.5, -0.5, 1.0, 1.0)
    }

    pub fn vertices(&self) -> [QuadVertex; 4] {
        std::array::from_fn(|i| QuadVertex {
            position: self.positions[i],
            uv: self.uvs[i].into(),
        })
    }

    /// Vertex data ready for a vertex buffer upload
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn sorting_layer(&self) -> &str {
        &self.sorting_layer
    }

    pub fn sorting_order(&self) -> i32 {
        self.sorting_order
    }
}

impl QuadMesh for Quad {
    fn uvs(&self) -> QuadUvs {
        self.uvs
    }

    fn set_uvs(&mut self, uvs: &QuadUvs) {
        self.uvs = *uvs;
    }
}

impl PanelSurface for Quad {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn set_sorting(&mut self, layer: &str, order: i32) {
        self.sorting_layer = layer.to_string();
        self.sorting_order = order;
    }
}

/// Left and right halves of a curtain covering `[-1, 1] x [-1, 1]`.
///
/// The left half slides its texture negatively and the right half
/// positively, so the two halves part from the middle.
pub fn split_curtain() -> Vec<PanelAnimator<Quad>> {
    vec![
        PanelAnimator::new(Quad::new(-1.0, -1.0, 1.0, 2.0), SlideDirection::Negative),
        PanelAnimator::new(Quad::new(0.0, -1.0, 1.0, 2.0), SlideDirection::Positive),
    ]
}

//! Texture-coordinate types for the four corners of a curtain quad.

/// Corner order matches the quad's vertex order: bottom-left, top-left,
/// bottom-right, top-right.
pub const BOTTOM_LEFT: usize = 0;
pub const TOP_LEFT: usize = 1;
pub const BOTTOM_RIGHT: usize = 2;
pub const TOP_RIGHT: usize = 3;

/// Corners that start moving as soon as an animation begins
pub const TOP_CORNERS: [usize; 2] = [TOP_LEFT, TOP_RIGHT];
/// Corners that lag behind and then catch up
pub const BOTTOM_CORNERS: [usize; 2] = [BOTTOM_LEFT, BOTTOM_RIGHT];

/// A single 2D texture coordinate
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uv {
    pub u: f32,
    pub v: f32,
}

impl Uv {
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }

    /// Shift horizontally, leaving `v` untouched
    pub fn offset_u(self, delta: f32) -> Self {
        Self {
            u: self.u + delta,
            v: self.v,
        }
    }

    /// Round both components to the nearest whole number (ties to even)
    pub fn snapped(self) -> Self {
        Self {
            u: self.u.round_ties_even(),
            v: self.v.round_ties_even(),
        }
    }

    /// True when both components are whole numbers
    pub fn is_whole(&self) -> bool {
        self.u.fract() == 0.0 && self.v.fract() == 0.0
    }
}

impl From<[f32; 2]> for Uv {
    fn from([u, v]: [f32; 2]) -> Self {
        Self { u, v }
    }
}

impl From<Uv> for [f32; 2] {
    fn from(uv: Uv) -> Self {
        [uv.u, uv.v]
    }
}

/// The four texture coordinates of one quad
pub type QuadUvs = [Uv; 4];

/// Texture coordinates of a quad showing its whole texture once
pub const UNIT_QUAD_UVS: QuadUvs = [
    Uv::new(0.0, 0.0),
    Uv::new(0.0, 1.0),
    Uv::new(1.0, 0.0),
    Uv::new(1.0, 1.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapped_rounds_drift() {
        let uv = Uv::new(0.9999, -1.0002).snapped();
        assert_eq!(uv, Uv::new(1.0, -1.0));
        assert!(uv.is_whole());
    }

    #[test]
    fn test_snapped_ties_to_even() {
        assert_eq!(Uv::new(0.5, 1.5).snapped(), Uv::new(0.0, 2.0));
        assert_eq!(Uv::new(-0.5, 2.5).snapped(), Uv::new(0.0, 2.0));
    }

    #[test]
    fn test_offset_u_keeps_v() {
        let uv = Uv::new(0.25, 0.75).offset_u(-1.0);
        assert_eq!(uv, Uv::new(-0.75, 0.75));
    }

    #[test]
    fn test_uv_is_plain_old_data() {
        let uvs = UNIT_QUAD_UVS;
        let bytes: &[u8] = bytemuck::cast_slice(&uvs);
        assert_eq!(bytes.len(), 4 * 2 * std::mem::size_of::<f32>());
    }
}

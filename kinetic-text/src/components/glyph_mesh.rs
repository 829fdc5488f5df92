use glam::Vec3;

/// The geometry of a single rendered glyph, owned by its glyph node.
///
/// Vertices are expressed in the node's local space. When the text is first laid out the node sits at
/// the text's origin, so the vertices are effectively in text space; materialising the text moves the
/// node onto the glyph's centre and recentres the vertices so the glyph doesn't visibly move.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphMesh {
    /// Vertex positions
    pub vertices: Vec<Vec3>,
    /// Triangle list indices into `vertices`
    pub indices: Vec<u32>,
}

impl GlyphMesh {
    /// A two triangle quad covering the rectangle between `bottom_left` and `top_right`
    pub fn quad(bottom_left: Vec3, top_right: Vec3) -> Self {
        let bottom_right = Vec3::new(top_right.x, bottom_left.y, bottom_left.z);
        let top_left = Vec3::new(bottom_left.x, top_right.y, top_right.z);
        Self {
            vertices: vec![bottom_left, top_left, top_right, bottom_right],
            indices: vec![0, 1, 2, 2, 3, 0],
        }
    }

    /// Shift every vertex by `-centre`
    pub fn recentre(&mut self, centre: Vec3) {
        for vertex in &mut self.vertices {
            *vertex -= centre;
        }
    }

    /// Mean of all vertex positions. An empty mesh has its centroid at the origin.
    pub fn centroid(&self) -> Vec3 {
        if self.vertices.is_empty() {
            return Vec3::ZERO;
        }
        self.vertices.iter().copied().sum::<Vec3>() / self.vertices.len() as f32
    }
}

use geometry::Vector;

/// Scratch result of one narrowphase test.
///
/// Owned by the caller and reused across tests: call [`CollisionResponse::clear`]
/// before every test, otherwise the minimum-overlap reduction starts from a
/// stale value.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionResponse {
    pub a: Option<u32>,
    pub b: Option<u32>,
    pub overlap: f32,
    /// Unit axis of least overlap. Subtracting `overlap_vector` from A's
    /// position separates the shapes.
    pub overlap_normal: Vector,
    pub overlap_vector: Vector,
    pub a_in_b: bool,
    pub b_in_a: bool,
    pub shape_index_a: Option<usize>,
    pub shape_index_b: Option<usize>,
}

impl CollisionResponse {
    pub fn new() -> Self {
        Self {
            a: None,
            b: None,
            overlap: f32::INFINITY,
            overlap_normal: Vector::zeros(),
            overlap_vector: Vector::zeros(),
            a_in_b: true,
            b_in_a: true,
            shape_index_a: None,
            shape_index_b: None,
        }
    }

    pub fn clear(&mut self) -> &mut Self {
        self.a = None;
        self.b = None;
        self.overlap = f32::INFINITY;
        self.overlap_normal = Vector::zeros();
        self.overlap_vector = Vector::zeros();
        self.a_in_b = true;
        self.b_in_a = true;
        self.shape_index_a = None;
        self.shape_index_b = None;
        self
    }

    /// Swaps the roles of A and B in place.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.a, &mut self.b);
        std::mem::swap(&mut self.a_in_b, &mut self.b_in_a);
        std::mem::swap(&mut self.shape_index_a, &mut self.shape_index_b);
        self.overlap_normal = -self.overlap_normal;
        self.overlap_vector = -self.overlap_vector;
    }

    pub fn flipped(&self) -> Self {
        let mut out = self.clone();
        out.flip();
        out
    }
}

impl Default for CollisionResponse {
    fn default() -> Self {
        Self::new()
    }
}

use glam::DVec2;

/// 2D vector used for positions, velocities and accelerations
pub type Vector2D = DVec2;

/// Split `v` into the part along `normal` and the part tangent to it.
/// `normal` is expected to be unit length.
pub fn split(v: Vector2D, normal: Vector2D) -> (Vector2D, Vector2D) {
    let along = normal * v.dot(normal);
    (along, v - along)
}

/// True when both components are within `eps` of zero
pub fn approx_zero(v: Vector2D, eps: f64) -> bool {
    v.x.abs() <= eps && v.y.abs() <= eps
}

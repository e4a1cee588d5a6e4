//! 相机矩阵

use glam::{Mat4, Vec3};

/// 构建视图矩阵（左手系 look-to）
///
/// `direction` 是视线方向，不是目标点；不要求归一化。
pub fn view_matrix(position: Vec3, direction: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_to_lh(position, direction, up)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_view_is_identity() {
        let view = view_matrix(Vec3::ZERO, Vec3::Z, Vec3::Y);
        assert!(view.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_eye_maps_to_origin() {
        let eye = Vec3::new(3.0, -2.0, 5.0);
        let view = view_matrix(eye, Vec3::new(0.3, 0.1, -1.0), Vec3::Y);
        let mapped = view.transform_point3(eye);
        assert!(mapped.abs_diff_eq(Vec3::ZERO, 1e-5));
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let view = view_matrix(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-0.5, 0.2, 0.8),
            Vec3::Y,
        );
        let x = view.x_axis.truncate();
        let y = view.y_axis.truncate();
        let z = view.z_axis.truncate();
        assert!((x.length() - 1.0).abs() < 1e-5);
        assert!((y.length() - 1.0).abs() < 1e-5);
        assert!((z.length() - 1.0).abs() < 1e-5);
        assert!(x.dot(y).abs() < 1e-5);
        assert!(x.dot(z).abs() < 1e-5);
        assert!(y.dot(z).abs() < 1e-5);
    }
}

use crate::{Vector2, VectorLike};

impl Vector2 {
    /// 内積（dot product）
    pub fn dot(&self, other: impl VectorLike) -> f64 {
        self.x * other.x() + self.y * other.y()
    }

    /// 2次元の外積（スカラー値）
    ///
    /// `other` がこのベクトルから反時計回り側にあるとき正になる。
    pub fn cross(&self, other: impl VectorLike) -> f64 {
        self.x * other.y() - other.x() * self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot() {
        let a = Vector2::new(1.0, 2.0);
        assert_eq!(a.dot((3.0, 4.0)), 11.0);
        assert_eq!(Vector2::RIGHT.dot(Vector2::TOP), 0.0);
        assert_eq!(a.dot(a), a.mag_sq());
    }

    #[test]
    fn test_cross_sign() {
        assert_eq!(Vector2::RIGHT.cross(Vector2::TOP), 1.0);
        assert_eq!(Vector2::TOP.cross(Vector2::RIGHT), -1.0);
        assert_eq!(Vector2::RIGHT.cross(Vector2::LEFT), 0.0);
    }

    #[test]
    fn test_cross_self_is_zero() {
        let v = Vector2::new(-3.5, 7.25);
        assert_eq!(v.cross(v), 0.0);
    }
}

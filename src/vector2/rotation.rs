use crate::{Vector2, VectorLike};

impl Vector2 {
    /// `origin` を中心に `angle` ラジアン回転する（正の値で反時計回り）。
    ///
    /// ```
    /// # use vector2::Vector2;
    /// use std::f64::consts::PI;
    ///
    /// let mut v = Vector2::new(2.0, 0.0);
    /// v.rotate_around(PI, (1.0, 0.0));
    ///
    /// assert!(v.x.abs() < 1e-12 && v.y.abs() < 1e-12);
    /// ```
    pub fn rotate_around(&mut self, angle: f64, origin: impl VectorLike) -> &mut Self {
        let (ox, oy) = (origin.x(), origin.y());
        let tx = self.x - ox;
        let ty = self.y - oy;
        let (sin, cos) = angle.sin_cos();
        self.set(tx * cos - ty * sin + ox, tx * sin + ty * cos + oy)
    }

    /// 原点を中心に `angle` ラジアン回転する。
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.rotate_around(angle, Vector2::ORIGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_rotate_quarter_turn() {
        let mut v = Vector2::new(1.0, 0.0);
        v.rotate(FRAC_PI_2);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_negative_is_clockwise() {
        let mut v = Vector2::new(1.0, 0.0);
        v.rotate(-FRAC_PI_2);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_around_point() {
        let mut v = Vector2::new(2.0, 0.0);
        v.rotate_around(PI, Vector2::new(1.0, 0.0));
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_around_preserves_distance() {
        let origin = Vector2::new(-3.0, 4.0);
        let mut v = Vector2::new(5.0, 1.0);
        let before = v.distance(origin);
        v.rotate_around(1.234, origin);
        assert_abs_diff_eq!(v.distance(origin), before, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_origin_itself_is_fixed() {
        let mut v = Vector2::new(2.0, 2.0);
        v.rotate_around(0.7, (2.0, 2.0));
        assert_eq!(v, Vector2::new(2.0, 2.0));
    }
}

use approx::{AbsDiffEq, RelativeEq};

use crate::Vector2;


/// 成分ごとに `approx` の比較を行うためのテスト専用の実装
impl AbsDiffEq for Vector2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector2 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use crate::Vector2;
    use approx::{assert_abs_diff_eq, assert_relative_eq, assert_relative_ne};

    #[test]
    fn test_vector_approx_is_componentwise() {
        let a = Vector2::new(1.0, 1000.0);
        let b = Vector2::new(1.0 + 1.0e-12, 1000.0 + 1.0e-9);
        assert_relative_eq!(a, b, epsilon = 1.0e-9, max_relative = 1.0e-9);
        assert_abs_diff_eq!(a, b, epsilon = 1.0e-8);

        // 片方の成分だけずれていても等しいとはみなさない
        let c = Vector2::new(1.0, 1001.0);
        assert_relative_ne!(a, c, epsilon = 1.0e-9, max_relative = 1.0e-9);
    }
}

#[cfg(test)]
use proptest::prelude::*;
#[cfg(any(test, feature = "random"))]
use rand::Rng;
#[cfg(any(test, feature = "random"))]
use std::ops::RangeInclusive;

use crate::Vector2;

impl Vector2 {
    /// ランダムな向きの単位ベクトルを生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random_unit() -> Self {
        let mut rng = rand::rng();
        Self::random_unit_using(&mut rng)
    }

    /// 外部の乱数生成器を使用してランダムな向きの単位ベクトルを生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random_unit_using<R: Rng>(rng: &mut R) -> Self {
        let theta = rng.random_range(0.0..std::f64::consts::TAU);
        Vector2::from_polar(1.0, theta)
    }

    /// 各成分を `range` の範囲から一様に選んだ [`Vector2`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random_within_using<R: Rng>(rng: &mut R, range: RangeInclusive<f64>) -> Self {
        let x = rng.random_range(range.clone());
        let y = rng.random_range(range);
        Vector2::new(x, y)
    }

    #[cfg(test)]
    pub fn arb() -> impl Strategy<Value = Self> {
        (-1.0e3..1.0e3_f64, -1.0e3..1.0e3_f64).prop_map(|(x, y)| Vector2::new(x, y))
    }

    /// 長さが十分に大きいベクトルのみを生成する
    #[cfg(test)]
    pub fn arb_non_zero() -> impl Strategy<Value = Self> {
        Self::arb().prop_filter("magnitude must be non-zero", |v| v.mag() > 1.0e-3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_unit_has_unit_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..100 {
            let v = Vector2::random_unit_using(&mut rng);
            assert_relative_eq!(v.mag(), 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(Vector2::random_unit().mag(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_random_within_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(67890);
        for _ in 0..100 {
            let v = Vector2::random_within_using(&mut rng, -2.0..=3.0);
            assert!((-2.0..=3.0).contains(&v.x));
            assert!((-2.0..=3.0).contains(&v.y));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(
            Vector2::random_within_using(&mut a, 0.0..=1.0),
            Vector2::random_within_using(&mut b, 0.0..=1.0)
        );
    }
}

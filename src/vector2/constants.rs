use crate::Vector2;

/// よく使う向きを表す定数。
///
/// `const` のため参照するたびに新しい値がコピーされ、
/// 破壊的な演算を呼んでも定数そのものが書き換わることはない。
///
/// ```
/// # use vector2::Vector2;
/// let mut right = Vector2::RIGHT;
/// right.scale(5.0);
///
/// assert_eq!(right, Vector2::new(5.0, 0.0));
/// assert_eq!(Vector2::RIGHT, Vector2::new(1.0, 0.0));
/// ```
impl Vector2 {
    /// 原点 (0, 0)
    pub const ORIGIN: Vector2 = Vector2::new(0.0, 0.0);

    /// 右向きの単位ベクトル (1, 0)
    pub const RIGHT: Vector2 = Vector2::new(1.0, 0.0);

    /// 左向きの単位ベクトル (-1, 0)
    pub const LEFT: Vector2 = Vector2::new(-1.0, 0.0);

    /// 上向きの単位ベクトル (0, 1)
    pub const TOP: Vector2 = Vector2::new(0.0, 1.0);

    /// 下向きの単位ベクトル (0, -1)
    pub const DOWN: Vector2 = Vector2::new(0.0, -1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_unit_or_zero() {
        assert_eq!(Vector2::ORIGIN.mag(), 0.0);
        for v in [Vector2::RIGHT, Vector2::LEFT, Vector2::TOP, Vector2::DOWN] {
            assert_eq!(v.mag(), 1.0);
        }
    }

    #[test]
    fn test_constants_cannot_be_mutated_through_use() {
        let mut origin = Vector2::ORIGIN;
        origin.translate(1.0, 1.0);

        let mut top = Vector2::TOP;
        top.set(3.0, 3.0);

        assert_eq!(Vector2::ORIGIN, Vector2::new(0.0, 0.0));
        assert_eq!(Vector2::TOP, Vector2::new(0.0, 1.0));
    }

    #[test]
    fn test_opposite_directions() {
        assert_eq!(Vector2::LEFT, -Vector2::RIGHT);
        assert_eq!(Vector2::DOWN, -Vector2::TOP);
    }
}

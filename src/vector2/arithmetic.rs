use crate::{Vector2, VectorLike};

impl Vector2 {
    /// 成分ごとの和を取る。
    pub fn add(&mut self, other: impl VectorLike) -> &mut Self {
        self.translate(other.x(), other.y())
    }

    /// 成分ごとの差を取る。
    pub fn sub(&mut self, other: impl VectorLike) -> &mut Self {
        self.translate(-other.x(), -other.y())
    }

    /// 成分ごとの積（アダマール積）を取る。
    ///
    /// ```
    /// # use vector2::Vector2;
    /// let mut v = Vector2::new(2.0, 3.0);
    /// v.hadamard((4.0, -1.0));
    ///
    /// assert_eq!(v, Vector2::new(8.0, -3.0));
    /// ```
    pub fn hadamard(&mut self, other: impl VectorLike) -> &mut Self {
        self.x *= other.x();
        self.y *= other.y();
        self
    }

    /// 両成分をスカラー `k` 倍する。
    pub fn scale(&mut self, k: f64) -> &mut Self {
        self.x *= k;
        self.y *= k;
        self
    }
}

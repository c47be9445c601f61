use crate::{Vector2, VectorLike};

impl Vector2 {
    /// `dir` の向きにベクトルを向け直す。
    ///
    /// 新しい長さには元のベクトルの長さではなく `self.dot(dir)` を用いる。
    /// そのため `dir` が元のベクトルと同じ向きの単位ベクトルでない限り、
    /// 長さは保存されない。長さを保ちたい場合は [`Vector2::point_along`] を使う。
    ///
    /// ```
    /// # use vector2::Vector2;
    /// let mut v = Vector2::new(2.0, 0.0);
    /// v.set_direction(Vector2::new(1.0, 1.0));
    ///
    /// // 長さは dot = 2 になる
    /// assert!((v.mag() - 2.0).abs() < 1e-12);
    /// ```
    pub fn set_direction(&mut self, dir: impl VectorLike) -> &mut Self {
        let m = self.dot(&dir);
        self.copy_from(&dir).set_mag(m)
    }

    /// 長さを保ったまま `dir` の向きにベクトルを向け直す。
    ///
    /// `dir` の長さが 0 の場合は [`Vector2::normalize`] と同様に 0 ベクトルになる。
    ///
    /// ```
    /// # use vector2::Vector2;
    /// let mut v = Vector2::new(3.0, 4.0);
    /// v.point_along(Vector2::DOWN);
    ///
    /// assert!(v.x.abs() < 1e-12 && (v.y + 5.0).abs() < 1e-12);
    /// ```
    pub fn point_along(&mut self, dir: impl VectorLike) -> &mut Self {
        let m = self.mag();
        self.copy_from(&dir).set_mag(m)
    }

    /// `other` との線形補間。
    ///
    /// `t` が `[0, 1]` の範囲外でもそのまま外挿する。
    pub fn lerp(&mut self, other: impl VectorLike, t: f64) -> &mut Self {
        let dx = other.x() - self.x;
        let dy = other.y() - self.y;
        self.translate(t * dx, t * dy)
    }
}

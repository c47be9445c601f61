use crate::{
    Vector2, VectorLike,
    error::Error,
    log::{debug, warn},
};

impl Vector2 {
    /// ベクトルの長さの二乗を返す。
    pub fn mag_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// ベクトルの長さを返す。
    pub fn mag(&self) -> f64 {
        self.mag_sq().sqrt()
    }

    /// 長さを 1 にする。
    ///
    /// 長さがちょうど 0 の場合は何もしない（ゼロ除算を避けるため）。
    /// 閾値による判定は行わず、非常に小さいベクトルも正規化される。
    ///
    /// ```
    /// # use vector2::Vector2;
    /// let mut v = Vector2::new(3.0, 4.0);
    /// v.normalize();
    /// assert!((v.x - 0.6).abs() < 1e-12 && (v.y - 0.8).abs() < 1e-12);
    ///
    /// let mut zero = Vector2::ORIGIN;
    /// zero.normalize();
    /// assert_eq!(zero, Vector2::ORIGIN);
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        let m = self.mag();
        if m == 0.0 {
            debug!("normalize on a zero-length vector left it unchanged");
            return self;
        }
        self.scale(1.0 / m)
    }

    /// 長さが 0 のときに [`Error::ZeroMagnitude`] を返す [`Vector2::normalize`]。
    pub fn try_normalize(&mut self) -> Result<&mut Self, Error> {
        if self.mag() == 0.0 {
            warn!("try_normalize called on a zero-length vector");
            return Err(Error::ZeroMagnitude {
                operation: "normalize",
            });
        }
        Ok(self.normalize())
    }

    /// 向きを保ったまま長さを `target` にする。
    ///
    /// 長さ 0 のベクトルは正規化できないため、`target` に関わらず 0 のまま。
    pub fn set_mag(&mut self, target: f64) -> &mut Self {
        self.normalize().scale(target)
    }

    /// 長さが 0 のときに [`Error::ZeroMagnitude`] を返す [`Vector2::set_mag`]。
    pub fn try_set_mag(&mut self, target: f64) -> Result<&mut Self, Error> {
        if self.mag() == 0.0 {
            warn!(magnitude = target, "try_set_mag called on a zero-length vector");
            return Err(Error::ZeroMagnitude {
                operation: "set_mag",
            });
        }
        Ok(self.set_mag(target))
    }

    /// p ノルム `(|x|^p + |y|^p)^(1/p)` を返す。
    ///
    /// 負の成分も絶対値を取ってから累乗する。
    /// `p` が正の無限大のときは最大値ノルム `max(|x|, |y|)` を返し、
    /// `p` が 0 以下または NaN のときは NaN を返す。
    ///
    /// ```
    /// # use vector2::Vector2;
    /// assert_eq!(Vector2::new(2.0, 3.0).norm(1.0), 5.0);
    /// assert_eq!(Vector2::new(-2.0, 3.0).norm(1.0), 5.0);
    /// assert!((Vector2::new(3.0, 4.0).norm(2.0) - 5.0).abs() < 1e-12);
    /// assert_eq!(Vector2::new(-7.0, 3.0).norm(f64::INFINITY), 7.0);
    /// ```
    pub fn norm(&self, p: f64) -> f64 {
        if p.is_nan() || p <= 0.0 {
            return f64::NAN;
        }
        let (ax, ay) = (self.x.abs(), self.y.abs());
        if p == f64::INFINITY {
            return ax.max(ay);
        }
        (ax.powf(p) + ay.powf(p)).powf(1.0 / p)
    }

    /// 他ベクトルとの距離
    pub fn distance(&self, other: impl VectorLike) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// 他ベクトルとの距離の二乗
    pub fn distance_sq(&self, other: impl VectorLike) -> f64 {
        let dx = self.x - other.x();
        let dy = self.y - other.y();
        dx * dx + dy * dy
    }
}

//! 極座標表現。
//!
//! [`Vector2::to_polar`] / [`Vector2::to_cartesian`] は同じ2成分の意味を
//! 書き換える破壊的な変換で、[`Polar`] は極座標であることを型で区別する値。

use crate::{Vector2, error::Error};

/// 動径 `r` と偏角 `theta`（ラジアン）で表される極座標
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polar {
    pub r: f64,
    pub theta: f64,
}

impl Polar {
    /// 指定された動径と偏角から [`Polar`] を生成する。
    pub const fn new(r: f64, theta: f64) -> Polar {
        Polar { r, theta }
    }

    /// 値が有限であるかを検証して [`Polar`] を生成する。
    pub fn try_new(r: f64, theta: f64) -> Result<Polar, Error> {
        if !r.is_finite() || !theta.is_finite() {
            return Err(Error::NonFinite { x: r, y: theta });
        }
        Ok(Polar { r, theta })
    }

    /// 直交座標の [`Vector2`] に変換する。
    ///
    /// ```
    /// # use vector2::{Polar, Vector2};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let v = Polar::new(2.0, FRAC_PI_2).to_vector2();
    /// assert!(v.x.abs() < 1e-12 && (v.y - 2.0).abs() < 1e-12);
    /// ```
    pub fn to_vector2(self) -> Vector2 {
        let (sin, cos) = self.theta.sin_cos();
        Vector2::new(self.r * cos, self.r * sin)
    }
}

impl From<Vector2> for Polar {
    fn from(v: Vector2) -> Self {
        v.polar()
    }
}

impl From<Polar> for Vector2 {
    fn from(p: Polar) -> Self {
        p.to_vector2()
    }
}

impl Vector2 {
    /// 極座標から [`Vector2`] を生成する。
    pub fn from_polar(r: f64, theta: f64) -> Vector2 {
        Polar::new(r, theta).to_vector2()
    }

    /// 現在の成分を直交座標とみなし、対応する [`Polar`] を返す。
    ///
    /// このベクトル自身は変更しない。
    pub fn polar(&self) -> Polar {
        Polar {
            r: self.mag(),
            theta: self.y.atan2(self.x),
        }
    }

    /// 現在の成分を直交座標とみなして極座標に変換し、
    /// `x` に動径、`y` に偏角を格納する。
    ///
    /// ```
    /// # use vector2::Vector2;
    /// let mut v = Vector2::new(0.0, 3.0);
    /// v.to_polar();
    ///
    /// assert_eq!(v.r(), 3.0);
    /// assert_eq!(v.theta(), std::f64::consts::FRAC_PI_2);
    /// ```
    pub fn to_polar(&mut self) -> &mut Self {
        let Polar { r, theta } = self.polar();
        self.set(r, theta)
    }

    /// 現在の成分を極座標 `(r, theta)` とみなして直交座標に戻す。
    pub fn to_cartesian(&mut self) -> &mut Self {
        let v = Polar::new(self.x, self.y).to_vector2();
        self.copy_from(v)
    }

    /// 動径。`x` の別名で、変換は行わない。
    pub fn r(&self) -> f64 {
        self.x
    }

    /// 偏角。`y` の別名で、変換は行わない。
    pub fn theta(&self) -> f64 {
        self.y
    }

    /// 動径を設定する。`x` を書き換える。
    pub fn set_r(&mut self, r: f64) -> &mut Self {
        self.x = r;
        self
    }

    /// 偏角を設定する。`y` を書き換える。
    pub fn set_theta(&mut self, theta: f64) -> &mut Self {
        self.y = theta;
        self
    }
}

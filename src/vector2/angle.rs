use std::f64::consts::TAU;

use crate::{Vector2, VectorLike, error::Error, log::warn};

impl Vector2 {
    /// 2つのベクトルのなす角を `[0, π]` の範囲で返す。
    ///
    /// どちらかの長さが 0 の場合は NaN になる。
    /// 平行なベクトルで丸め誤差により余弦が `[-1, 1]` を外れることがあるため、
    /// `acos` の前に範囲内に収める。
    ///
    /// ```
    /// # use vector2::Vector2;
    /// let a = Vector2::angle(Vector2::RIGHT, Vector2::TOP);
    /// assert!((a - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    ///
    /// assert!(Vector2::angle(Vector2::ORIGIN, Vector2::TOP).is_nan());
    /// ```
    pub fn angle(v1: impl VectorLike, v2: impl VectorLike) -> f64 {
        let a = Vector2::new(v1.x(), v1.y());
        let b = Vector2::new(v2.x(), v2.y());
        let cos = a.dot(b) / (a.mag_sq() * b.mag_sq()).sqrt();
        cos.clamp(-1.0, 1.0).acos()
    }

    /// `v1` から `v2` へ反時計回りに測った角を `[0, 2π)` の範囲で返す。
    ///
    /// どちらかの長さが 0 の場合は NaN になる。
    pub fn angle2(v1: impl VectorLike, v2: impl VectorLike) -> f64 {
        let a = Vector2::new(v1.x(), v1.y());
        let angle = Vector2::angle(a, &v2);
        if a.cross(&v2) < 0.0 {
            TAU - angle
        } else {
            angle
        }
    }

    /// 長さ 0 のベクトルに対して [`Error::ZeroMagnitude`] を返す [`Vector2::angle`]。
    pub fn try_angle(v1: impl VectorLike, v2: impl VectorLike) -> Result<f64, Error> {
        check_non_zero(&v1, &v2, "angle")?;
        Ok(Vector2::angle(v1, v2))
    }

    /// 長さ 0 のベクトルに対して [`Error::ZeroMagnitude`] を返す [`Vector2::angle2`]。
    pub fn try_angle2(v1: impl VectorLike, v2: impl VectorLike) -> Result<f64, Error> {
        check_non_zero(&v1, &v2, "angle2")?;
        Ok(Vector2::angle2(v1, v2))
    }
}

fn check_non_zero(
    v1: impl VectorLike,
    v2: impl VectorLike,
    operation: &'static str,
) -> Result<(), Error> {
    let zero1 = v1.x() == 0.0 && v1.y() == 0.0;
    let zero2 = v2.x() == 0.0 && v2.y() == 0.0;
    if zero1 || zero2 {
        warn!(operation, "angle requested for a zero-length vector");
        return Err(Error::ZeroMagnitude { operation });
    }
    Ok(())
}

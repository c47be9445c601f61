//! 2次元ベクトル型 [`Vector2`] とその演算。
//!
//! 破壊的な演算はすべて `&mut Self` を返すため、メソッドを連鎖して呼び出せる。
//!
//! ```
//! # use vector2::Vector2;
//! let mut v = Vector2::new(3.0, 4.0);
//! v.scale(2.0).translate(-6.0, -8.0).add((1.0, 0.0));
//!
//! assert_eq!(v, Vector2::RIGHT);
//! ```

use crate::{VectorLike, error::Error};

pub(crate) mod angle;
pub(crate) mod arithmetic;
pub(crate) mod constants;
pub(crate) mod direction;
pub(crate) mod format;
pub(crate) mod magnitude;
pub(crate) mod ops;
pub mod polar;
pub(crate) mod product;
pub(crate) mod random;
pub(crate) mod rotation;

#[cfg(test)]
mod tests;

/// 平面上の点または方向を表す2成分のベクトル。
///
/// [`Vector2::to_polar`] を呼んだ後は、同じ2つの成分が極座標
/// （`x` に動径 `r`、`y` に偏角 `theta`）として解釈される。
/// どちらの解釈で値が入っているかは型では追跡しないため、
/// 取り違えを避けたい場合は [`Polar`](crate::Polar) を使うこと。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// 指定された成分から [`Vector2`] を生成する。
    ///
    /// # Examples
    /// ```
    /// # use vector2::Vector2;
    /// let v = Vector2::new(1.5, -2.0);
    ///
    /// assert_eq!(v.x, 1.5);
    /// assert_eq!(v.y, -2.0);
    /// assert_eq!(Vector2::default(), Vector2::new(0.0, 0.0));
    /// ```
    pub const fn new(x: f64, y: f64) -> Vector2 {
        Vector2 { x, y }
    }

    /// 成分が有限の値であるかを検証して [`Vector2`] を生成する。
    ///
    /// NaN や無限大を含む場合は [`Error::NonFinite`] を返す。
    ///
    /// # Examples
    /// ```
    /// # use vector2::{Error, Vector2};
    /// assert!(Vector2::try_new(1.0, 2.0).is_ok());
    /// assert_eq!(
    ///     Vector2::try_new(f64::INFINITY, 0.0),
    ///     Err(Error::NonFinite { x: f64::INFINITY, y: 0.0 })
    /// );
    /// ```
    pub fn try_new(x: f64, y: f64) -> Result<Vector2, Error> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::NonFinite { x, y });
        }
        Ok(Vector2 { x, y })
    }

    /// 両成分を上書きする。
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// 各成分に差分を加えて平行移動する。
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    /// `other` の成分でこのベクトルを置き換える。
    ///
    /// # Examples
    /// ```
    /// # use vector2::Vector2;
    /// let mut v = Vector2::new(9.0, 9.0);
    /// v.copy_from([1.0, 2.0]);
    ///
    /// assert_eq!(v, Vector2::new(1.0, 2.0));
    /// ```
    pub fn copy_from(&mut self, other: impl VectorLike) -> &mut Self {
        self.set(other.x(), other.y())
    }
}

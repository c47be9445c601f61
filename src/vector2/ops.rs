//! 演算子の実装。
//!
//! `Add` / `Sub` は実装しない。`std::ops::Add` をスコープに入れたときに
//! `v.add(w)` が破壊的な [`Vector2::add`] ではなく演算子側に解決されてしまうため。
//! 値を返す加減算は `+=` / `-=` か、コピーしてから `add` / `sub` を呼ぶ。

use std::ops::{AddAssign, Div, Mul, MulAssign, Neg, SubAssign};

use crate::{Vector2, VectorLike};

impl<V: VectorLike> AddAssign<V> for Vector2 {
    fn add_assign(&mut self, rhs: V) {
        Vector2::add(self, rhs);
    }
}

impl<V: VectorLike> SubAssign<V> for Vector2 {
    fn sub_assign(&mut self, rhs: V) {
        Vector2::sub(self, rhs);
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;
    fn div(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

use crate::Vector2;

/// `x` と `y` の2成分を持つ値を、[`Vector2`] の演算の相手として扱うためのトレイト。
///
/// [`Vector2`] 自身のほか、`(f64, f64)` や `[f64; 2]` のような座標の組も
/// そのまま渡すことができる。
///
/// ```
/// # use vector2::Vector2;
/// let mut v = Vector2::new(1.0, 2.0);
/// v.add((3.0, 4.0)).add([1.0, 1.0]).add(Vector2::RIGHT);
///
/// assert_eq!(v, Vector2::new(6.0, 7.0));
/// ```
pub trait VectorLike {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl VectorLike for Vector2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl VectorLike for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl VectorLike for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

impl<T: VectorLike + ?Sized> VectorLike for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// `tracing` フィーチャーの有無で切り替わるログ出力マクロ。
mod log;

/// 2次元ベクトル型 `Vector2` と極座標型 `Polar`。
mod vector2;

/// 演算の相手として受け付ける値のトレイト定義と実装。
mod vector_like;

pub use error::Error;
pub use vector2::{Vector2, polar::Polar};
pub use vector_like::VectorLike;

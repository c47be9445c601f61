//! ログ出力用のマクロ。
//!
//! `tracing` フィーチャーが有効な場合は `tracing` のマクロをクレート内に公開し、
//! 無効な場合は何も出力しないマクロに展開される。
//! どちらの場合もクレートの公開 API には含まれない。

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! noop_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! noop_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {noop_debug as debug, noop_warn as warn};

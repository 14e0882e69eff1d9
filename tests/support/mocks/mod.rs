// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod catalog;
pub mod time;
pub mod util;

/* -------------------------------- 再エクスポート -------------------------------- */

// 時刻関連
pub use time::fixed_now;

// カタログ関連
pub use catalog::{
    CountingCatalog, FailingQueryCatalog, InMemoryCatalog, MidStreamFailingCatalog,
    UnavailableCatalog,
};

// ユーティリティ関連
pub use util::DummyClock;

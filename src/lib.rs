//! # Airfetch
//!
//! Airtable のテーブルからレコードを取得する非同期クライアント
//!
//! 構成モジュール：
//!
//! - **client**: 取得処理本体（URL構築、ステータス解釈、デコード）
//! - **transport**: 注入可能なHTTPトランスポート（本番は reqwest）
//! - **models**: レコードとレスポンスエンベロープ
//! - **error**: 閉じたエラー分類
//! - **config**: 設定ファイル読み込み
//! - **cli**: CLI引数のパース

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{AirtableClient, API_ROOT, REQUEST_TIMEOUT};
pub use config::Config;
pub use error::FetchError;
pub use models::{Record, RecordPage};
pub use transport::{HttpTransport, ReqwestTransport, TransportError, TransportResponse};

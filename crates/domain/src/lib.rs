//! # Stintboard ドメイン層
//!
//! ストアや HTTP に依存しない純粋なルールを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! functions → infra → domain
//!     ↘                 ↑
//!       ───────────────
//! ```
//!
//! ## モジュール構成
//!
//! - [`account`] - アカウント消去で使うファイル所有判定
//! - [`business`] - ビジネスの認証状態と認証ゲート
//! - [`clock`] - サーバー時刻の提供
//! - [`document`] - スキーマレスなドキュメントとコレクション
//! - [`error`] - ドメインエラー
//! - [`ids`] - サーバー採番 ID
//! - [`profile`] - プロフィール書き込み時の保護フィールド
//! - [`validation`] - リクエストの必須フィールド検証

#[macro_use]
mod macros;

pub mod account;
pub mod business;
pub mod clock;
pub mod document;
pub mod error;
pub mod ids;
pub mod profile;
pub mod validation;

pub use error::DomainError;

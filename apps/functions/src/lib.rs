//! # Stintboard Functions ライブラリ
//!
//! クライアントアプリから呼ばれる HTTP 関数群のコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app`: DI とルーター構築
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラーと HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `usecase`: 検証・ゲート・ストア操作

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;

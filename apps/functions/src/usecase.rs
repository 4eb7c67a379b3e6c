//! # ユースケース層
//!
//! 各エンドポイントの処理本体。ハンドラは JSON の受け取りとレスポンス整形のみを行い、
//! 検証・ゲート判定・ストア操作はここで行う。
//!
//! ストアは `Arc<dyn Trait>` で受け取り、テストではインメモリ実装に差し替える。

pub mod account;
pub mod application;
pub mod profile;
pub mod stint;
pub mod verification;

pub use account::AccountUseCaseImpl;
pub use application::ApplicationUseCaseImpl;
pub use profile::{ProfileUseCaseImpl, ProfileWriteOutcome};
pub use stint::StintUseCaseImpl;
pub use verification::{AdminGate, VerificationUseCaseImpl};

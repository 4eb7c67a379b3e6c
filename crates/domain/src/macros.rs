/// サーバー採番のドキュメント ID 型を定義する宣言型マクロ
///
/// 以下を一括生成する:
/// - `String` をラップした Newtype（ドキュメントキーは文字列）
/// - `derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)`
/// - `generate()`: UUID v7 を 32 桁の hex で採番
/// - `as_str()`
///
/// # 使用例
///
/// ```rust
/// use stintboard_domain::ids::StintId;
///
/// let id = StintId::generate();
/// assert_eq!(id.as_str().len(), 32);
/// assert_ne!(StintId::generate(), id);
/// ```
macro_rules! define_document_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[display("{_0}")]
        #[serde(transparent)]
        $vis struct $Name(String);

        impl $Name {
            /// 新しい ID を採番する（UUID v7）
            pub fn generate() -> Self {
                Self(uuid::Uuid::now_v7().simple().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

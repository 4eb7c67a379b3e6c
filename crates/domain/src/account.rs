//! # アカウント消去のファイル所有判定
//!
//! ファイル名に構造化された所有者フィールドはない。所有者はファイル名への
//! 部分一致のみで推定する。
//!
//! この判定は粗い。ID `abc123` の消去では `cvs/xabc123y.pdf` のように
//! 別ユーザーのファイル名に偶然含まれる場合も一致する。

/// アカウント消去でスキャンするファイルのプレフィックス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobPrefix {
    /// 履歴書
    Cvs,
    /// その他アップロード
    Uploads,
}

impl BlobPrefix {
    pub const ALL: [Self; 2] = [Self::Cvs, Self::Uploads];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cvs => "cvs/",
            Self::Uploads => "uploads/",
        }
    }
}

/// ファイル名に `account_id` が含まれていれば、そのアカウントの所有とみなす
///
/// 空の ID はすべてのファイル名に含まれてしまうため、所有者なしとして扱う。
pub fn blob_belongs_to(blob_name: &str, account_id: &str) -> bool {
    !account_id.is_empty() && blob_name.contains(account_id)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::先頭一致("cvs/abc123_resume.pdf", true)]
    #[case::部分一致("cvs/xabc123y.pdf", true)]
    #[case::ディレクトリ("uploads/abc123/photo.png", true)]
    #[case::別id("cvs/def456_resume.pdf", false)]
    #[case::大文字小文字は区別する("cvs/ABC123.pdf", false)]
    fn test_部分一致で所有を判定する(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(blob_belongs_to(name, "abc123"), expected);
    }

    #[test]
    fn test_空のidはどのファイルも所有しない() {
        assert!(!blob_belongs_to("cvs/abc123_resume.pdf", ""));
    }

    #[test]
    fn test_プレフィックスの文字列表現() {
        let prefixes: Vec<&str> = BlobPrefix::ALL.iter().map(|p| p.as_str()).collect();

        assert_eq!(prefixes, vec!["cvs/", "uploads/"]);
    }
}

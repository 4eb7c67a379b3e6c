//! AccountEraser の統合テスト
//!
//! 全ストアをインメモリ実装に差し替え、`with_all_erasers` で組み立てた
//! レジストリが実際に何を消し、何を残すかを検証する。

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use stintboard_domain::document::Collection;
use stintboard_infra::{
    AccountEraser,
    Outcome,
    mock::{InMemoryBlobStore, InMemoryDocumentStore, InMemoryIdentityProvider, StoreOperation},
};

struct Stores {
    documents: InMemoryDocumentStore,
    blobs:     InMemoryBlobStore,
    identity:  InMemoryIdentityProvider,
}

impl Stores {
    fn eraser(&self) -> AccountEraser {
        AccountEraser::with_all_erasers(
            Arc::new(self.documents.clone()),
            Arc::new(self.blobs.clone()),
            Arc::new(self.identity.clone()),
        )
    }
}

/// `abc123` のアカウントに紐づくデータと、他アカウントのデータを配置する
fn seeded_stores() -> Stores {
    let documents = InMemoryDocumentStore::new();
    documents.insert(Collection::Users, "abc123", json!({ "uid": "abc123" }));
    documents.insert(Collection::Users, "def456", json!({ "uid": "def456" }));
    documents.insert(
        Collection::Applications,
        "app-1",
        json!({ "userId": "abc123", "stintId": "stint-1" }),
    );
    documents.insert(
        Collection::Applications,
        "app-2",
        json!({ "userId": "abc123", "stintId": "stint-2" }),
    );
    documents.insert(
        Collection::Applications,
        "app-3",
        json!({ "userId": "def456", "stintId": "stint-1" }),
    );
    documents.insert(
        Collection::Stints,
        "stint-1",
        json!({ "businessId": "abc123", "stintId": "stint-1" }),
    );
    documents.insert(
        Collection::Stints,
        "stint-2",
        json!({ "businessId": "biz-9", "stintId": "stint-2" }),
    );

    let blobs = InMemoryBlobStore::with_names(["cvs/abc123_resume.pdf", "cvs/def456_resume.pdf"]);
    let identity = InMemoryIdentityProvider::with_accounts(["abc123", "def456"]);

    Stores {
        documents,
        blobs,
        identity,
    }
}

#[tokio::test]
async fn test_認証サービスが失敗しても一致するデータだけが消去される() {
    // Given
    let stores = seeded_stores();
    stores.identity.fail_deletes();
    let sut = stores.eraser();

    // When
    let report = sut.erase_all("abc123").await;

    // Then
    assert_eq!(report.failed_steps(), vec!["identity:account"]);
    assert_eq!(
        report.deleted_counts(),
        vec![
            ("documents:users", 1),
            ("documents:businesses", 0),
            ("documents:applications", 2),
            ("documents:stints", 1),
            ("blobs:cvs/", 1),
            ("blobs:uploads/", 0),
        ]
    );
    assert_eq!(report.blobs_deleted(), 1);

    assert_eq!(stores.documents.ids(Collection::Users), vec!["def456"]);
    assert_eq!(stores.documents.ids(Collection::Applications), vec!["app-3"]);
    assert_eq!(stores.documents.ids(Collection::Stints), vec!["stint-2"]);
    assert_eq!(stores.blobs.names(), vec!["cvs/def456_resume.pdf"]);
    assert!(stores.identity.has_account("abc123"));
}

#[tokio::test]
async fn test_ファイル名にidを部分的に含むファイルも消去される() {
    // Given
    let stores = seeded_stores();
    let blobs = InMemoryBlobStore::with_names([
        "cvs/abc123_resume.pdf",
        "cvs/xabc123y.pdf",
        "uploads/abc123/photo.png",
        "uploads/other.png",
    ]);
    let sut = AccountEraser::with_all_erasers(
        Arc::new(stores.documents.clone()),
        Arc::new(blobs.clone()),
        Arc::new(stores.identity.clone()),
    );

    // When
    let report = sut.erase_all("abc123").await;

    // Then
    assert!(!report.has_failures());
    assert_eq!(report.blobs_deleted(), 3);
    assert_eq!(blobs.names(), vec!["uploads/other.png"]);
    assert!(!stores.identity.has_account("abc123"));
}

#[tokio::test]
async fn test_検索の失敗は後続ステップを止めない() {
    // Given
    let stores = seeded_stores();
    stores
        .documents
        .fail_on(StoreOperation::Find, Collection::Applications);
    let sut = stores.eraser();

    // When
    let report = sut.erase_all("abc123").await;

    // Then
    assert_eq!(report.failed_steps(), vec!["documents:applications"]);
    assert!(matches!(
        report.outcome("documents:stints"),
        Some(Outcome::Succeeded { deleted: 1 })
    ));
    assert_eq!(stores.documents.ids(Collection::Applications).len(), 3);
    assert!(!stores.identity.has_account("abc123"));
}

#[tokio::test]
async fn test_存在しないアカウントの消去は全ステップ0件で成功する() {
    let stores = seeded_stores();
    let sut = stores.eraser();

    let report = sut.erase_all("zzz999").await;

    assert!(!report.has_failures());
    let counts: Vec<u64> = report
        .deleted_counts()
        .into_iter()
        .filter(|(name, _)| *name != "identity:account")
        .map(|(_, count)| count)
        .collect();
    assert_eq!(counts, vec![0; 6]);
    assert_eq!(stores.documents.ids(Collection::Applications).len(), 3);
}

#[tokio::test]
async fn test_ユーザーの存在確認に失敗してもユーザードキュメントは消去される() {
    // Given
    let stores = seeded_stores();
    stores.documents.fail_on(StoreOperation::Get, Collection::Users);
    let sut = stores.eraser();

    // When
    let report = sut.erase_all("abc123").await;

    // Then
    assert!(!report.has_failures());
    assert_eq!(stores.documents.ids(Collection::Users), vec!["def456"]);
}

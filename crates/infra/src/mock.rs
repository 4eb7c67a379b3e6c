//! # テスト用インメモリストア
//!
//! ユースケーステスト・ハンドラテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! stintboard-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 各ストアは `Clone` で状態を共有する。テストは片方を `Arc<dyn Trait>` として
//! 注入し、もう片方で書き込み結果を検証する。

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    sync::{
        Arc,
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use serde_json::Value;
use stintboard_domain::document::{Collection, Document};

use crate::{BlobStore, DocumentStore, IdentityProvider, error::InfraError};

// ===== InMemoryDocumentStore =====

/// 失敗を注入する対象の操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    Get,
    Set,
    Update,
    Delete,
    Find,
}

#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    documents:   Arc<Mutex<BTreeMap<(Collection, String), Document>>>,
    failures:    Arc<Mutex<HashSet<(StoreOperation, Collection)>>>,
    writes:      Arc<AtomicUsize>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// ドキュメントを直接配置する（書き込み回数には数えない）
    pub fn insert(&self, collection: Collection, id: &str, document: Value) {
        let document = match document {
            Value::Object(map) => map,
            other => panic!("ドキュメントは JSON オブジェクトである必要があります: {other}"),
        };
        self.documents
            .lock()
            .unwrap()
            .insert((collection, id.to_string()), document);
    }

    pub fn document(&self, collection: Collection, id: &str) -> Option<Document> {
        self.documents
            .lock()
            .unwrap()
            .get(&(collection, id.to_string()))
            .cloned()
    }

    pub fn contains(&self, collection: Collection, id: &str) -> bool {
        self.document(collection, id).is_some()
    }

    /// コレクション内のドキュメント ID（昇順）
    pub fn ids(&self, collection: Collection) -> Vec<String> {
        self.documents
            .lock()
            .unwrap()
            .keys()
            .filter(|(c, _)| *c == collection)
            .map(|(_, id)| id.clone())
            .collect()
    }

    /// set / update / delete が呼ばれた回数（失敗した呼び出しも含む）
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// 指定コレクションへの指定操作を以後すべて失敗させる
    pub fn fail_on(&self, operation: StoreOperation, collection: Collection) {
        self.failures.lock().unwrap().insert((operation, collection));
    }

    /// ping を失敗させる
    pub fn make_unavailable(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    fn check(&self, operation: StoreOperation, collection: Collection) -> Result<(), InfraError> {
        if self
            .failures
            .lock()
            .unwrap()
            .contains(&(operation, collection))
        {
            return Err(InfraError::dynamo_db(format!(
                "{operation:?} on {collection}: 注入された失敗"
            )));
        }
        Ok(())
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>, InfraError> {
        self.check(StoreOperation::Get, collection)?;
        Ok(self.document(collection, id))
    }

    async fn set(
        &self,
        collection: Collection,
        id: &str,
        document: Document,
    ) -> Result<(), InfraError> {
        self.record_write();
        self.check(StoreOperation::Set, collection)?;
        self.documents
            .lock()
            .unwrap()
            .insert((collection, id.to_string()), document);
        Ok(())
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Document,
    ) -> Result<(), InfraError> {
        self.record_write();
        self.check(StoreOperation::Update, collection)?;
        let mut documents = self.documents.lock().unwrap();
        let Some(document) = documents.get_mut(&(collection, id.to_string())) else {
            return Err(InfraError::document_not_found(collection.to_string(), id));
        };
        document.extend(fields);
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), InfraError> {
        self.record_write();
        self.check(StoreOperation::Delete, collection)?;
        self.documents
            .lock()
            .unwrap()
            .remove(&(collection, id.to_string()));
        Ok(())
    }

    async fn find_ids_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> Result<Vec<String>, InfraError> {
        self.check(StoreOperation::Find, collection)?;
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|((c, _), document)| *c == collection && document.get(field) == Some(value))
            .map(|((_, id), _)| id.clone())
            .collect())
    }

    async fn ping(&self) -> Result<(), InfraError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(InfraError::dynamo_db("ストアに接続できません"));
        }
        Ok(())
    }
}

// ===== InMemoryBlobStore =====

#[derive(Clone, Default)]
pub struct InMemoryBlobStore {
    names:         Arc<Mutex<BTreeSet<String>>>,
    fail_listing:  Arc<AtomicBool>,
    fail_deleting: Arc<AtomicBool>,
}

impl InMemoryBlobStore {
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::default();
        store
            .names
            .lock()
            .unwrap()
            .extend(names.into_iter().map(Into::into));
        store
    }

    /// 格納されているファイル名（昇順）
    pub fn names(&self) -> Vec<String> {
        self.names.lock().unwrap().iter().cloned().collect()
    }

    pub fn fail_listing(&self) {
        self.fail_listing.store(true, Ordering::SeqCst);
    }

    pub fn fail_deleting(&self) {
        self.fail_deleting.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn list_names(&self, prefix: &str) -> Result<Vec<String>, InfraError> {
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(InfraError::s3("一覧取得: 注入された失敗"));
        }
        Ok(self
            .names
            .lock()
            .unwrap()
            .iter()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn delete(&self, name: &str) -> Result<(), InfraError> {
        if self.fail_deleting.load(Ordering::SeqCst) {
            return Err(InfraError::s3(format!("削除 {name}: 注入された失敗")));
        }
        self.names.lock().unwrap().remove(name);
        Ok(())
    }
}

// ===== InMemoryIdentityProvider =====

#[derive(Clone, Default)]
pub struct InMemoryIdentityProvider {
    accounts: Arc<Mutex<BTreeSet<String>>>,
    failing:  Arc<AtomicBool>,
}

impl InMemoryIdentityProvider {
    pub fn with_accounts<I, S>(accounts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let provider = Self::default();
        provider
            .accounts
            .lock()
            .unwrap()
            .extend(accounts.into_iter().map(Into::into));
        provider
    }

    pub fn has_account(&self, uid: &str) -> bool {
        self.accounts.lock().unwrap().contains(uid)
    }

    pub fn fail_deletes(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn delete_account(&self, uid: &str) -> Result<(), InfraError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(InfraError::identity("予期しないステータス 500: 注入された失敗"));
        }
        self.accounts.lock().unwrap().remove(uid);
        Ok(())
    }
}

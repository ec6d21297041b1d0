/// DynamoDBにユーザーレコードを保存するためのユーザーリポジトリ
use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::types::AttributeValue;
use thiserror::Error;

use crate::domain::UserRecord;

/// リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// DynamoDBへの書き込みに失敗
    #[error("Write error: {0}")]
    WriteError(String),
}

/// ユーザーレコード永続化用トレイト
///
/// このトレイトは永続化機能を抽象化し、
/// 異なる実装を可能にします（実際のDynamoDB、テスト用モック）。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// レコードを書き込む（insert-or-replace）
    ///
    /// # 引数
    /// * `record` - 保存するユーザーレコード（`id`がパーティションキー）
    ///
    /// # 戻り値
    /// * 成功時は`Ok(())`
    /// * 失敗時は`Err(RepositoryError)`
    async fn put(&self, record: &UserRecord) -> Result<(), RepositoryError>;
}

/// UserRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoUserRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// ユーザーテーブル名
    table_name: String,
}

impl DynamoUserRepository {
    /// 新しいDynamoUserRepositoryを作成
    ///
    /// # 引数
    /// * `client` - DynamoDBクライアント
    /// * `table_name` - ユーザーテーブルの名前
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// テーブル名を取得
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl UserRepository for DynamoUserRepository {
    async fn put(&self, record: &UserRecord) -> Result<(), RepositoryError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("id", AttributeValue::S(record.id.clone()))
            .item("name", AttributeValue::S(record.name.clone()))
            .item("email", AttributeValue::S(record.email.clone()))
            .send()
            .await
            .map_err(|e| RepositoryError::WriteError(e.to_string()))?;

        Ok(())
    }
}

/// ユーザーレコードとフィールドのデフォルト値ポリシー
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `name`が指定されなかった場合のデフォルト値
pub const DEFAULT_NAME: &str = "Anonymous";

/// `email`が指定されなかった場合のデフォルト値
pub const DEFAULT_EMAIL: &str = "no-email@example.com";

/// 登録されたユーザーを表すレコード
///
/// 3つのフィールドはすべて常に値を持つ。
/// `id`はハンドラーが生成し、呼び出し元から受け取ることはない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// ランダムに生成したUUID v4（パーティションキー）
    pub id: String,
    /// ユーザー名
    pub name: String,
    /// メールアドレス
    pub email: String,
}

impl UserRecord {
    /// 新しいIDを生成してレコードを作成
    ///
    /// `name`/`email`が`None`の場合はデフォルト値を使用する。
    /// 空文字列はそのまま保持される。
    pub fn register(name: Option<String>, email: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name_or_default(name),
            email: email_or_default(email),
        }
    }
}

/// `name`のデフォルト値を適用
pub fn name_or_default(name: Option<String>) -> String {
    name.unwrap_or_else(|| DEFAULT_NAME.to_string())
}

/// `email`のデフォルト値を適用
pub fn email_or_default(email: Option<String>) -> String {
    email.unwrap_or_else(|| DEFAULT_EMAIL.to_string())
}

//! 設定の読み込み関数

use super::{
    ConfigError,
    Settings,
};

/// JSON 文字列から設定を読み込み、バリデーションする
///
/// 指定されていないフィールドはデフォルト値になる
///
/// # Errors
/// - JSON パースエラー
/// - バリデーションエラー
pub fn load_from_str(json: &str) -> Result<Settings, ConfigError> {
    let settings: Settings = serde_json::from_str(json)?;
    settings.validate().map_err(ConfigError::ValidationErrors)?;

    tracing::debug!("Settings loaded: {:?}", settings);
    Ok(settings)
}

//! Error handling for credential validation
//!
//! This module provides the failure taxonomy and the normalized user-facing
//! error using the thiserror crate for ergonomic error handling.

use thiserror::Error;

/// Classified cause of a failed validation exchange
///
/// Detection priority is strict: an explicit `success: false` body wins over
/// an error status, and a transport failure is only reported when no usable
/// response arrived at all.
#[derive(Error, Debug)]
pub enum FailureCause {
    /// The remote endpoint explicitly flagged the credential as invalid
    #[error("認証情報がリモートで拒否されました（無効な認証情報）")]
    Rejected,

    /// The remote returned an error status with a readable body
    #[error("リモートがエラーを報告しました: {message}")]
    RemoteReported { message: String },

    /// No usable response (timeout, DNS failure, connection refused)
    #[error("通信エラーが発生しました: {message}")]
    Transport { message: String },
}

impl FailureCause {
    /// Get error code for this cause
    pub fn code(&self) -> &'static str {
        match self {
            Self::Rejected => "SEMANTIC_REJECTION",
            Self::RemoteReported { .. } => "REMOTE_REPORTED_FAILURE",
            Self::Transport { .. } => "TRANSPORT_FAILURE",
        }
    }
}

/// Main error type for credential validation
///
/// Every failed exchange surfaces as a single `ValidationFailed` kind carrying
/// a generic corrective hint; the classified cause is retained as the error
/// source and logged before normalization, not discarded.
#[derive(Error, Debug)]
pub enum ValidateError {
    #[error(
        "認証情報の検証に失敗しました。認証情報が64文字の16進数文字列（0xプレフィックスなし）であることを確認してください"
    )]
    ValidationFailed {
        #[source]
        cause: FailureCause,
    },

    #[error("エンドポイントの復号に失敗しました: {message}")]
    EndpointDecode { message: String },
}

impl ValidateError {
    /// Get error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationFailed { .. } => "VALIDATION_FAILED",
            Self::EndpointDecode { .. } => "ENDPOINT_DECODE",
        }
    }

    /// Get suggested actions for this error
    pub fn suggested_actions(&self) -> Vec<&'static str> {
        match self {
            Self::ValidationFailed {
                cause: FailureCause::Rejected,
            } => vec![
                "環境変数に設定した認証情報を確認してください",
                "64文字の16進数文字列（0xプレフィックスなし）か確認してください",
            ],
            Self::ValidationFailed {
                cause: FailureCause::RemoteReported { .. },
            } => vec![
                "リモートのエラーメッセージを確認してください",
                "認証情報の形式を確認してください",
            ],
            Self::ValidationFailed {
                cause: FailureCause::Transport { .. },
            } => vec![
                "ネットワーク接続を確認してください",
                "エンドポイントに到達できるか確認してください",
            ],
            Self::EndpointDecode { .. } => {
                vec!["設定されたエンドポイント値を確認してください"]
            }
        }
    }
}

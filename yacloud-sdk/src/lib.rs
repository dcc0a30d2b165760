#![doc = include_str!("../README.md")]

#[cfg(feature = "translate")]
pub mod translate;

/// Yandex Cloud 认证相关
#[cfg(feature = "translate")]
pub mod credentials;

//! Error types
//!
//! Gameplay itself never fails; these cover startup and the host boundary.

use thiserror::Error;

/// Why the game refused to leave Idle/Over
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("assets not ready (pending: {pending:?}, failed: {failed:?})")]
    AssetsNotReady {
        pending: Vec<String>,
        failed: Vec<String>,
    },
    #[error("game is already running")]
    AlreadyRunning,
}

/// Configuration could not be used
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl SettingsError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        SettingsError::Invalid { field, reason }
    }
}

/// GPU setup failed or a frame could not be presented
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    UnsupportedSurface,
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

use std::sync::RwLock;

use anyhow::Result;

/// Session cache for the display scale factor (logical = physical / scale).
///
/// Written once on first use. Scaling only changes with a display
/// reconfiguration, so `refresh` is the explicit re-resolve signal.
pub struct ScaleCache {
    inner: RwLock<Option<f64>>,
}

impl ScaleCache {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Current scale, resolving it on first call.
    pub fn get_or_resolve(&self) -> f64 {
        self.get_or_resolve_with(resolve_scale)
    }

    /// Re-resolve and atomically replace the cached value.
    pub fn refresh(&self) -> f64 {
        self.refresh_with(resolve_scale)
    }

    fn get_or_resolve_with(&self, resolve: impl FnOnce() -> f64) -> f64 {
        if let Some(scale) = *self.inner.read().expect("scale cache poisoned") {
            return scale;
        }
        let mut slot = self.inner.write().expect("scale cache poisoned");
        // Another caller may have resolved while we waited for the lock.
        *slot.get_or_insert_with(resolve)
    }

    fn refresh_with(&self, resolve: impl FnOnce() -> f64) -> f64 {
        let scale = resolve();
        *self.inner.write().expect("scale cache poisoned") = Some(scale);
        scale
    }
}

impl Default for ScaleCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the OS display scale, degrading to 1.0 with a warning when
/// detection fails. A wrong scale misplaces a click; it never aborts the
/// invocation.
pub fn resolve_scale() -> f64 {
    sanitize_scale(detect_scale())
}

fn sanitize_scale(detected: Result<f64>) -> f64 {
    match detected {
        Ok(scale) if scale.is_finite() && scale > 0.0 => {
            tracing::debug!("display scale factor: {scale:.2}");
            scale
        }
        Ok(scale) => {
            tracing::warn!("ignoring nonsensical display scale {scale}, assuming 1.0");
            1.0
        }
        Err(e) => {
            tracing::warn!("display scale detection failed, assuming 1.0: {e:#}");
            1.0
        }
    }
}

/// Effective system DPI over the 96 dpi baseline.
///
/// DPI awareness must be requested first; compatibility shims feed unaware
/// processes a constant 96 regardless of the real scale.
#[cfg(windows)]
fn detect_scale() -> Result<f64> {
    use windows::Win32::UI::HiDpi::{
        GetDpiForSystem, PROCESS_PER_MONITOR_DPI_AWARE, SetProcessDpiAwareness,
    };
    use windows::Win32::UI::WindowsAndMessaging::{SetProcessDPIAware, USER_DEFAULT_SCREEN_DPI};

    unsafe {
        if SetProcessDpiAwareness(PROCESS_PER_MONITOR_DPI_AWARE).is_err() {
            // Legacy call for older systems and restricted processes.
            let _ = SetProcessDPIAware();
        }
        Ok(GetDpiForSystem() as f64 / USER_DEFAULT_SCREEN_DPI as f64)
    }
}

#[cfg(not(windows))]
fn detect_scale() -> Result<f64> {
    use anyhow::Context;

    let monitors = xcap::Monitor::all().context("Failed to get monitors")?;
    let monitor = monitors
        .iter()
        .find(|m| m.is_primary())
        .or(monitors.first())
        .context("No monitor found")?;
    Ok(monitor.scale_factor() as f64)
}

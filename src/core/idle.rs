use super::engine::Engine;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IdleReport {
    pub elapsed_seconds: f64,
    pub auto_rate: f64,
    pub points_granted: f64,
}

pub fn elapsed_seconds(last_checkpoint_ms: i64, now_ms: i64) -> f64 {
    let delta_ms = now_ms.saturating_sub(last_checkpoint_ms);
    if delta_ms <= 0 {
        return 0.0;
    }
    delta_ms as f64 / 1000.0
}

/// Grants passive generation for the time since the engine's last checkpoint.
///
/// Must run after upgrade levels have been restored, so the granted amount
/// reflects the restored rate. One multiplication regardless of idle length.
/// The checkpoint always ends at `now_ms`, even when it was in the future.
pub fn reconcile_on_resume(engine: &mut Engine, now_ms: i64) -> IdleReport {
    let elapsed = elapsed_seconds(engine.last_checkpoint_ms(), now_ms);
    let auto_rate = engine.auto_rate();
    let granted = engine.advance_to(now_ms);

    if granted > 0.0 {
        tracing::info!(
            elapsed_seconds = elapsed,
            auto_rate,
            points = granted,
            "applied idle gains"
        );
    }

    IdleReport {
        elapsed_seconds: elapsed,
        auto_rate,
        points_granted: granted,
    }
}

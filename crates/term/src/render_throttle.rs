use crate::core::GameSnapshot;

/// Skips redundant redraws of screens that only change on input.
///
/// Timed phases redraw every frame. The home and game over screens redraw as
/// soon as their content changes, and otherwise at most once per
/// `min_static_interval_ms` so a lost frame is eventually repaired.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last: None,
        }
    }

    /// Decide whether to draw `snap` at `now_ms`.
    pub fn should_render_snapshot(&mut self, now_ms: u64, snap: &GameSnapshot) -> bool {
        self.should_render(now_ms, snap.fingerprint(), snap.phase.is_static())
    }

    /// Decide whether to render a new frame.
    ///
    /// - `is_static=false`: always render.
    /// - `is_static=true`: render on fingerprint change, otherwise at most once
    ///   per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some((_, last_fp)) if last_fp != fingerprint => true,
            Some((last_ms, _)) => now_ms.saturating_sub(last_ms) >= self.min_static_interval_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }

    /// Forget the last frame so the next call always renders.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

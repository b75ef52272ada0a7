use dialwork_engine::coords::Viewport;
use dialwork_engine::schedule::RedrawHost;
use dialwork_engine::Surface;

use crate::config::ClockConfig;
use crate::frame::ClockFrame;
use crate::geometry::LayoutGeometry;
use crate::time::{ClockState, SystemClock, TimeSource};

/// Analog clock widget driven by a host.
///
/// The host calls [`on_resize`](Self::on_resize) whenever the drawing area
/// changes and [`render`](Self::render) whenever it redraws. Each render samples
/// the time source, paints the dial and hands, and asks the host for the next
/// frame according to the configured [`RedrawPolicy`](crate::cadence::RedrawPolicy).
///
/// Until the first resize with a non-zero area there is nothing to lay out, so
/// renders skip painting but still reschedule.
pub struct ClockRenderer<T: TimeSource = SystemClock> {
    config: ClockConfig,
    time_source: T,
    geometry: LayoutGeometry,
    viewport: Option<Viewport>,
    last_state: Option<ClockState>,
    frames: u64,
}

impl ClockRenderer<SystemClock> {
    /// Renderer reading the local system clock.
    pub fn new(config: ClockConfig) -> Self {
        Self::with_time_source(config, SystemClock)
    }
}

impl<T: TimeSource> ClockRenderer<T> {
    pub fn with_time_source(config: ClockConfig, time_source: T) -> Self {
        Self {
            config,
            time_source,
            geometry: LayoutGeometry::default(),
            viewport: None,
            last_state: None,
            frames: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    #[inline]
    pub fn geometry(&self) -> &LayoutGeometry {
        &self.geometry
    }

    /// Last viewport that produced a layout.
    #[inline]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    #[inline]
    pub fn is_laid_out(&self) -> bool {
        self.viewport.is_some()
    }

    #[inline]
    pub fn time_source(&self) -> &T {
        &self.time_source
    }

    /// State sampled by the most recent render.
    #[inline]
    pub fn last_state(&self) -> Option<ClockState> {
        self.last_state
    }

    /// Number of renders so far, painted or not.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Recomputes the layout for a new surface size.
    ///
    /// A zero-area or non-finite size keeps the previous layout.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        let Some(geometry) = LayoutGeometry::compute(
            viewport,
            &self.config.hand_lengths,
            self.config.tick_mark_length,
            self.config.center_dot_radius,
        ) else {
            log::warn!("ignoring degenerate clock size {width}x{height}; keeping previous layout");
            return;
        };

        if self.viewport == Some(viewport) && self.geometry == geometry {
            log::trace!("clock size unchanged at {width}x{height}");
            return;
        }

        log::debug!(
            "clock laid out for {width}x{height}: center ({}, {}), radius {}",
            geometry.center.x,
            geometry.center.y,
            geometry.radius,
        );
        self.geometry = geometry;
        self.viewport = Some(viewport);
    }

    /// Resolved frame for `state` under the current layout.
    pub fn frame(&self, state: ClockState) -> ClockFrame {
        ClockFrame::build(&self.geometry, &self.config.style, state)
    }

    /// Samples the time, paints onto `surface` if there is one, and schedules
    /// the next redraw on `host`.
    pub fn render(&mut self, surface: Option<&mut dyn Surface>, host: &mut dyn RedrawHost) -> ClockState {
        let state = ClockState::from_wall(self.time_source.now());
        self.last_state = Some(state);
        self.frames += 1;

        match surface {
            Some(surface) if self.is_laid_out() => {
                log::trace!(
                    "clock frame {} at {:02}:{:02}:{:02}",
                    self.frames,
                    state.hour,
                    state.minute,
                    state.second,
                );
                self.frame(state).paint(surface);
            }
            Some(_) => log::trace!("clock not laid out yet; skipping paint"),
            None => log::trace!("no surface for clock frame {}", self.frames),
        }

        self.config.redraw.issue(host);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;
    use std::time::Duration;

    use dialwork_engine::coords::Vec2;
    use dialwork_engine::paint::Color;
    use dialwork_engine::scene::DrawList;

    use crate::cadence::RedrawPolicy;
    use crate::geometry::HandKind;
    use crate::time::{FixedClock, WallTime};

    #[derive(Default)]
    struct Recorder {
        immediate: u32,
        delayed: Vec<Duration>,
    }

    impl RedrawHost for Recorder {
        fn request_redraw(&mut self) {
            self.immediate += 1;
        }
        fn request_redraw_after(&mut self, delay: Duration) {
            self.delayed.push(delay);
        }
    }

    fn renderer_at(hour24: u32, minute: u32, second: u32) -> ClockRenderer<FixedClock> {
        ClockRenderer::with_time_source(
            ClockConfig::default(),
            FixedClock::new(WallTime::new(hour24, minute, second)),
        )
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn resize_is_idempotent() {
        let mut r = renderer_at(0, 0, 0);
        r.on_resize(800.0, 600.0);
        let first = *r.geometry();
        r.on_resize(800.0, 600.0);
        assert_eq!(*r.geometry(), first);
        assert_eq!(first.center, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn degenerate_resize_keeps_previous_layout() {
        let mut r = renderer_at(0, 0, 0);
        r.on_resize(0.0, 0.0);
        assert!(r.geometry().radius.is_finite());
        assert_eq!(r.geometry().radius, 0.0);
        assert!(!r.is_laid_out());

        r.on_resize(400.0, 400.0);
        let laid_out = *r.geometry();
        r.on_resize(0.0, 0.0);
        assert_eq!(*r.geometry(), laid_out);
        assert_eq!(r.viewport(), Some(Viewport::new(400.0, 400.0)));
    }

    #[test]
    fn resize_rederives_unset_lengths_only() {
        let config = ClockConfig::default().with_hand_length(HandKind::Hour, crate::geometry::HandLength::Absolute(50.0));
        let mut r = ClockRenderer::with_time_source(config, FixedClock::default());
        r.on_resize(200.0, 200.0);
        r.on_resize(400.0, 400.0);
        assert_eq!(r.geometry().hour_hand_length, 50.0);
        assert!((r.geometry().minute_hand_length - 180.0 * 0.7).abs() < 1e-3);
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn quarter_past_three_end_to_end() {
        let mut r = renderer_at(3, 15, 30);
        r.on_resize(800.0, 600.0);

        let mut list = DrawList::new();
        let mut host = Recorder::default();
        let state = r.render(Some(&mut list), &mut host);
        assert_eq!(state, ClockState { hour: 3, minute: 15, second: 30 });

        let expected = 3.0 * (PI / 6.0) + 15.0 * (PI / 360.0) + 30.0 * (PI / 21600.0);
        let frame = r.frame(state);
        let hour = frame.hand(HandKind::Hour);
        assert!((hour.angle - expected).abs() < 1e-5);

        let len = r.geometry().hour_hand_length;
        assert!((len - 270.0 * 0.55).abs() < 1e-3);
        let tip = Vec2::new(400.0 + len * expected.sin(), 300.0 - len * expected.cos());
        assert!(hour.segment.to.distance(tip) < 1e-3);

        let drawn = list.items().last().and_then(|i| i.cmd.as_line()).unwrap();
        assert_eq!(drawn.from, Vec2::new(400.0, 300.0));
        assert!(drawn.to.distance(tip) < 1e-3);
        assert_eq!(drawn.stroke.color, Color::GREEN);
    }

    #[test]
    fn render_schedules_both_triggers_by_default() {
        let mut r = renderer_at(9, 0, 0);
        r.on_resize(100.0, 100.0);
        let mut host = Recorder::default();
        r.render(None, &mut host);
        r.render(None, &mut host);
        assert_eq!(host.immediate, 2);
        assert_eq!(host.delayed, vec![Duration::from_millis(500); 2]);
        assert_eq!(r.frames(), 2);
    }

    #[test]
    fn missing_surface_still_reschedules() {
        let mut r = renderer_at(9, 0, 0);
        r.on_resize(100.0, 100.0);
        let mut host = Recorder::default();
        let state = r.render(None, &mut host);
        assert_eq!(state.hour, 9);
        assert_eq!(r.last_state(), Some(state));
        assert_eq!(host.immediate, 1);
    }

    #[test]
    fn render_before_layout_paints_nothing() {
        let mut r = renderer_at(9, 0, 0);
        let mut list = DrawList::new();
        let mut host = Recorder::default();
        r.render(Some(&mut list), &mut host);
        assert!(list.is_empty());
        assert_eq!(host.delayed.len(), 1);
    }

    #[test]
    fn render_follows_the_time_source() {
        let mut r = renderer_at(23, 59, 58);
        r.on_resize(100.0, 100.0);
        let mut host = Recorder::default();
        assert_eq!(r.render(None, &mut host).hour, 11);

        r.time_source().set(WallTime::new(0, 0, 1));
        let state = r.render(None, &mut host);
        assert_eq!(state, ClockState { hour: 12, minute: 0, second: 1 });
    }

    #[test]
    fn consolidated_policy_is_honored() {
        let config = ClockConfig::default().with_redraw(RedrawPolicy::immediate());
        let mut r = ClockRenderer::with_time_source(config, || WallTime::new(1, 2, 3));
        let mut host = Recorder::default();
        r.render(None, &mut host);
        assert_eq!(host.immediate, 1);
        assert!(host.delayed.is_empty());
    }

    #[test]
    fn configured_hour_color_reaches_the_surface() {
        let purple = Color::from_rgba8(0x80, 0x00, 0x80, 0xff);
        let config = ClockConfig::default().with_hand_color(HandKind::Hour, purple);
        let mut r = ClockRenderer::with_time_source(config, FixedClock::default());
        r.on_resize(300.0, 300.0);

        let mut list = DrawList::new();
        r.render(Some(&mut list), &mut Recorder::default());
        let colors: Vec<Color> = list.items()[14..]
            .iter()
            .filter_map(|i| i.cmd.as_line())
            .map(|l| l.stroke.color)
            .collect();
        assert_eq!(colors, vec![Color::RED, Color::BLUE, purple]);
    }
}

use crate::*;

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start))
    }

    fn gen_unit(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

fn offset(s: &str) -> ScrollOffset {
    s.parse().unwrap()
}

#[test]
fn linear_mapping_matches_interpolation_formula() {
    let (a, b, x, y) = (0.2f32, 0.66f32, 100.0f32, -100.0f32);
    let m = RangeMapping::linear(a, b, x, y).unwrap();
    for i in 0..=100 {
        let p = i as f32 / 100.0;
        let expected = x + (p.clamp(a, b) - a) / (b - a) * (y - x);
        assert_close(m.sample(p), expected);
    }
}

#[test]
fn mapping_clamps_outside_input_range() {
    let m = RangeMapping::linear(0.5, 1.0, 100.0, 0.0).unwrap();
    assert_eq!(m.sample(0.0), 100.0);
    assert_eq!(m.sample(0.25), 100.0);
    assert_eq!(m.sample(1.0), 0.0);
    assert_eq!(m.sample(1.5), 0.0);
    assert_eq!(m.sample(f32::NAN), 100.0);
}

#[test]
fn multi_stop_mapping_interpolates_each_segment() {
    let m = RangeMapping::new([0.0, 0.5, 0.5, 1.0], [0.0, 10.0, 50.0, 100.0]).unwrap();
    assert_close(m.sample(0.25), 5.0);
    // The zero-width segment at 0.5 steps straight to its later output.
    assert_close(m.sample(0.5), 50.0);
    assert_close(m.sample(0.75), 75.0);
}

#[test]
fn leading_zero_width_segment_steps_to_later_output() {
    let step = RangeMapping::new([0.5, 0.5], [0.0, 100.0]).unwrap();
    assert_eq!(step.sample(0.49), 0.0);
    assert_eq!(step.sample(0.5), 100.0);
    assert_eq!(step.sample(0.9), 100.0);

    let m = RangeMapping::new([0.5, 0.5, 1.0], [0.0, 50.0, 100.0]).unwrap();
    assert_eq!(m.sample(0.25), 0.0);
    assert_eq!(m.sample(0.5), 50.0);
    assert_close(m.sample(0.75), 75.0);

    // A regular first segment still starts at its first output.
    let ramp = RangeMapping::linear(0.5, 1.0, 100.0, 0.0).unwrap();
    assert_eq!(ramp.sample(0.5), 100.0);
}

#[test]
fn mapping_rejects_invalid_stops() {
    assert_eq!(
        RangeMapping::new([0.0], [1.0]),
        Err(ConfigError::TooFewStops(1))
    );
    assert_eq!(
        RangeMapping::new([0.0, 1.0], [1.0]),
        Err(ConfigError::MismatchedStops {
            input: 2,
            output: 1
        })
    );
    assert_eq!(
        RangeMapping::new([0.0, 1.5], [0.0, 1.0]),
        Err(ConfigError::InputOutOfRange {
            index: 1,
            value: 1.5
        })
    );
    assert_eq!(
        RangeMapping::new([0.6, 0.3], [0.0, 1.0]),
        Err(ConfigError::NonMonotonicInput {
            index: 1,
            value: 0.3,
            previous: 0.6
        })
    );
    assert_eq!(
        RangeMapping::new([0.0, 1.0], [0.0, f32::INFINITY]),
        Err(ConfigError::NonFinite("range mapping output"))
    );
}

#[test]
fn scroll_offsets_parse_keywords_percentages_and_pixels() {
    assert_eq!(offset("top 80%"), ScrollOffset::top_at(0.8));
    assert_eq!(offset("bottom 20%"), ScrollOffset::bottom_at(0.2));
    assert_eq!(
        offset("start start"),
        ScrollOffset::new(Edge::START, Edge::START)
    );
    assert_eq!(offset("end end"), ScrollOffset::new(Edge::END, Edge::END));
    assert_eq!(
        offset("center 100px"),
        ScrollOffset::new(Edge::CENTER, Edge::pixels(100.0))
    );
    assert_eq!(
        offset("  bottom   top "),
        ScrollOffset::new(Edge::END, Edge::START)
    );

    for bad in ["top", "", "middle top", "top 80% 10", "top abc%"] {
        assert!(matches!(
            bad.parse::<ScrollOffset>(),
            Err(ConfigError::InvalidOffset(_))
        ));
    }
}

#[test]
fn scroll_offset_resolves_against_element_and_viewport() {
    let bounds = ElementBounds::new(2000.0, 1000.0);
    assert_close(offset("top 80%").scroll_position(bounds, 1000.0), 1200.0);
    assert_close(offset("bottom 20%").scroll_position(bounds, 1000.0), 2800.0);
    assert_close(offset("top bottom").scroll_position(bounds, 1000.0), 1000.0);
    assert_close(offset("bottom top").scroll_position(bounds, 1000.0), 3000.0);
}

#[test]
fn container_progress_is_clamped_to_unit_range() {
    let source = ProgressSource::CONTAINER;
    let bounds = ElementBounds::new(0.0, 3000.0);
    assert_eq!(source.range(bounds, 1000.0), (0.0, 2000.0));
    assert_eq!(source.progress(-50.0, bounds, 1000.0), 0.0);
    assert_close(source.progress(500.0, bounds, 1000.0), 0.25);
    assert_eq!(source.progress(2000.0, bounds, 1000.0), 1.0);
    assert_eq!(source.progress(9000.0, bounds, 1000.0), 1.0);
    assert_eq!(source.progress(f32::NAN, bounds, 1000.0), 0.0);
}

#[test]
fn degenerate_progress_range_steps_between_zero_and_one() {
    // A container no taller than the viewport has nothing to scroll through.
    let source = ProgressSource::CONTAINER;
    let bounds = ElementBounds::new(100.0, 500.0);
    assert_eq!(source.progress(99.0, bounds, 800.0), 0.0);
    assert_eq!(source.progress(100.0, bounds, 800.0), 1.0);
    assert_eq!(source.progress(400.0, bounds, 800.0), 1.0);
}

#[test]
fn smoother_output_stays_within_unit_range() {
    let mut rng = Lcg::new(7);
    let mut smoother = ProgressSmoother::new(SpringConfig::new(400.0, 2.0));
    let mut now_ms = 0u64;
    smoother.set_raw(0.0);
    smoother.advance(now_ms);

    for _ in 0..2_000 {
        let raw = if rng.gen_bool() {
            // Hard flicks between the ends are the worst case for overshoot.
            if rng.gen_bool() { 1.0 } else { 0.0 }
        } else {
            rng.gen_unit()
        };
        smoother.set_raw(raw);
        now_ms += rng.gen_range_u64(0, 50);
        let v = smoother.advance(now_ms);
        assert!((-1e-6..=1.0 + 1e-6).contains(&v), "smoothed progress {v}");
    }
}

#[test]
fn smoother_is_deterministic_for_a_trajectory() {
    let mut rng = Lcg::new(42);
    let trajectory: Vec<(f32, u64)> = (0..300)
        .map(|_| (rng.gen_unit(), rng.gen_range_u64(1, 40)))
        .collect();

    let run = || {
        let mut s = ProgressSmoother::new(SpringConfig::SCROLL);
        let mut now_ms = 0u64;
        let mut out = Vec::new();
        for &(raw, dt) in &trajectory {
            s.set_raw(raw);
            now_ms += dt;
            out.push(s.advance(now_ms));
        }
        out
    };
    assert_eq!(run(), run());
}

#[test]
fn smoother_primes_on_first_sample_and_settles_on_target() {
    let mut s = ProgressSmoother::new(SpringConfig::SCROLL);
    s.set_raw(0.4);
    assert_eq!(s.value(), 0.4);
    assert_eq!(s.advance(0), 0.4);

    s.set_raw(1.0);
    let early = s.advance(50);
    assert!(early > 0.4 && early < 1.0, "early={early}");
    assert_eq!(s.advance(5_000), 1.0);
    assert!(s.is_settled());
}

#[test]
fn scroll_spring_preset_does_not_oscillate() {
    assert!(SpringConfig::SCROLL.is_non_oscillating());
    assert!(!SpringConfig::default().is_non_oscillating());
    assert_eq!(SpringConfig::SCROLL.validate(), Ok(()));
    assert_eq!(
        SpringConfig::new(-1.0, 10.0).validate(),
        Err(ConfigError::InvalidSpring {
            name: "stiffness",
            value: -1.0
        })
    );
    assert!(SpringConfig::SCROLL.with_mass(0.0).validate().is_err());
}

#[test]
fn spring_snaps_after_long_gaps() {
    let mut spring = Spring::new(SpringConfig::SCROLL, 0.0);
    spring.advance(0);
    spring.set_target(250.0);
    assert!(!spring.advance(60_000));
    assert_eq!(spring.value(), 250.0);
}

#[test]
fn opacity_fades_to_floor_by_half_scroll_then_holds() {
    let source = ProgressSource::CONTAINER;
    let container = ElementBounds::new(0.0, 3000.0);
    let viewport = 1000.0;
    let opacity = PropertyMapping::new(
        Property::Opacity,
        RangeMapping::linear(0.0, 0.5, 1.0, 0.3).unwrap(),
    );
    let (start, end) = source.range(container, viewport);

    let mut smoother = ProgressSmoother::new(SpringConfig::SCROLL);
    let mut now_ms = 0u64;
    for step in 0..=100 {
        let scroll = start + (end - start) * step as f32 / 100.0;
        let raw = source.progress(scroll, container, viewport);
        let direct = opacity.sample(raw);
        if step == 0 {
            assert_eq!(direct, 1.0);
        }
        if step >= 50 {
            assert_close(direct, 0.3);
        } else {
            assert!(direct > 0.3);
        }

        smoother.set_raw(raw);
        now_ms += 16;
        let smoothed = opacity.sample(smoother.advance(now_ms));
        assert!((0.3 - 1e-6..=1.0 + 1e-6).contains(&smoothed));
    }

    let settled = smoother.advance(now_ms + 5_000);
    assert_eq!(opacity.sample(settled), 0.3);
}

#[test]
fn stagger_offsets_items_by_constant_delay() {
    for stagger in [100u64, 150] {
        let spec = TweenSpec::new(800)
            .with_from_to(Property::Y, 100.0, 0.0)
            .with_stagger(stagger);
        let starts: Vec<u64> = (0..4).map(|i| spec.item_start_ms(i)).collect();
        assert_eq!(starts, [0, stagger, 2 * stagger, 3 * stagger]);
        assert_eq!(spec.total_ms(4), 800 + 3 * stagger);
    }
}

#[test]
fn staggered_items_animate_in_source_order() {
    let spec = TweenSpec::new(1000)
        .with_from_to(Property::Opacity, 0.0, 1.0)
        .with_stagger(200);
    let mut timeline = Timeline::new(spec, 4);
    timeline.play(0);
    timeline.tick(300);

    let opacities: Vec<f32> = (0..4)
        .map(|i| timeline.item_style(i).resolved(Property::Opacity))
        .collect();
    assert_close(opacities[0], 0.3);
    assert_close(opacities[1], 0.1);
    assert_eq!(opacities[2], 0.0);
    assert_eq!(opacities[3], 0.0);

    assert!(!timeline.tick(10_000));
    assert!(timeline.is_at_end());
    for i in 0..4 {
        assert_eq!(timeline.item_style(i).get(Property::Opacity), Some(1.0));
    }
}

#[test]
fn delay_holds_items_at_from_state() {
    let spec = TweenSpec::new(500)
        .with_from_to(Property::Y, 20.0, 0.0)
        .with_delay(1000)
        .with_stagger(100);
    let mut timeline = Timeline::new(spec, 4);
    timeline.play(0);
    timeline.tick(999);
    assert_eq!(timeline.item_style(0).get(Property::Y), Some(20.0));
    timeline.tick(1250);
    assert_close(timeline.item_style(0).resolved(Property::Y), 10.0);
    assert_eq!(timeline.total_ms(), 1000 + 300 + 500);
}

fn entrance_rule() -> TriggerRule {
    TriggerRule::new(
        TweenSpec::new(1200)
            .with_from_to(Property::Y, 100.0, 0.0)
            .with_from_to(Property::Opacity, 0.0, 1.0)
            .with_easing(Easing::Power3Out),
    )
    .with_start(offset("top 80%"))
    .with_end(offset("bottom 20%"))
}

const SECTION: ElementBounds = ElementBounds::new(2000.0, 1000.0);
const VIEWPORT: f32 = 1000.0;

#[test]
fn trigger_plays_on_enter_and_shows_when_done() {
    let mut t = Trigger::new(entrance_rule(), 1);
    assert_eq!(t.state(), TriggerState::Idle);
    assert!(t.update(1000.0, SECTION, VIEWPORT, 0).is_empty());

    let fired = t.update(1300.0, SECTION, VIEWPORT, 100);
    assert_eq!(fired.iter().collect::<Vec<_>>(), [TriggerEvent::Enter]);
    assert_eq!(t.state(), TriggerState::Entering);

    t.tick(700);
    assert_eq!(t.state(), TriggerState::Entering);
    t.tick(1300);
    assert_eq!(t.state(), TriggerState::Shown);
    assert_eq!(t.item_style(0), entrance_rule().animation.to_style());
}

#[test]
fn trigger_reversed_before_completion_returns_to_idle() {
    let rule = entrance_rule();
    let from = rule.animation.from_style();
    let mut t = Trigger::new(rule, 1);

    t.update(1300.0, SECTION, VIEWPORT, 0);
    t.tick(500);
    assert_ne!(t.item_style(0), from);

    let fired = t.update(1100.0, SECTION, VIEWPORT, 500);
    assert_eq!(fired.iter().collect::<Vec<_>>(), [TriggerEvent::LeaveBack]);
    assert_eq!(t.state(), TriggerState::Exiting);

    t.tick(800);
    assert_eq!(t.state(), TriggerState::Exiting);
    t.tick(1000);
    assert_eq!(t.state(), TriggerState::Idle);
    assert_eq!(t.item_style(0), from);
}

#[test]
fn default_policy_ignores_leave_and_enter_back() {
    let mut t = Trigger::new(entrance_rule(), 1);
    t.update(1300.0, SECTION, VIEWPORT, 0);
    t.tick(2000);
    assert_eq!(t.state(), TriggerState::Shown);

    // Past the end and back again: both crossings map to `none`.
    let fired = t.update(3000.0, SECTION, VIEWPORT, 2000);
    assert_eq!(fired.iter().collect::<Vec<_>>(), [TriggerEvent::Leave]);
    assert_eq!(t.zone(), Zone::After);
    let fired = t.update(2500.0, SECTION, VIEWPORT, 2100);
    assert_eq!(fired.iter().collect::<Vec<_>>(), [TriggerEvent::EnterBack]);
    assert_eq!(t.state(), TriggerState::Shown);

    // Wiggling inside the active zone crosses nothing.
    for scroll in [2400.0, 1500.0, 2700.0, 1250.0] {
        assert!(t.update(scroll, SECTION, VIEWPORT, 2200).is_empty());
    }
    assert_eq!(t.state(), TriggerState::Shown);
}

#[test]
fn reentry_replays_after_reverse() {
    let mut t = Trigger::new(entrance_rule(), 1);
    t.update(1300.0, SECTION, VIEWPORT, 0);
    t.tick(2000);
    t.update(0.0, SECTION, VIEWPORT, 2000);
    t.tick(4000);
    assert_eq!(t.state(), TriggerState::Idle);

    t.update(1500.0, SECTION, VIEWPORT, 5000);
    assert_eq!(t.state(), TriggerState::Entering);
    t.tick(7000);
    assert_eq!(t.state(), TriggerState::Shown);
}

#[test]
fn jumping_over_the_range_fires_both_crossings_in_order() {
    let mut t = Trigger::new(entrance_rule(), 1);
    let fired = t.update(5000.0, SECTION, VIEWPORT, 0);
    assert_eq!(fired.len(), 2);
    assert_eq!(
        fired.iter().collect::<Vec<_>>(),
        [TriggerEvent::Enter, TriggerEvent::Leave]
    );
    assert_eq!(t.state(), TriggerState::Entering);
    t.tick(600);

    let fired = t.update(0.0, SECTION, VIEWPORT, 600);
    assert_eq!(
        fired.iter().collect::<Vec<_>>(),
        [TriggerEvent::EnterBack, TriggerEvent::LeaveBack]
    );
    assert_eq!(t.state(), TriggerState::Exiting);
}

#[test]
fn trigger_already_inside_range_enters_on_first_update() {
    // A hero at the top of the page is in range before any scrolling happens.
    let hero = ElementBounds::new(0.0, 1000.0);
    let mut t = Trigger::new(entrance_rule(), 1);
    let fired = t.update(0.0, hero, VIEWPORT, 0);
    assert_eq!(fired.iter().collect::<Vec<_>>(), [TriggerEvent::Enter]);
}

#[test]
fn in_view_policy_reverses_on_leave() {
    let rule = entrance_rule().with_toggle_actions(ToggleActions::IN_VIEW);
    let mut t = Trigger::new(rule, 1);
    t.update(1300.0, SECTION, VIEWPORT, 0);
    t.tick(2000);
    t.update(3500.0, SECTION, VIEWPORT, 2000);
    assert_eq!(t.state(), TriggerState::Exiting);
    t.tick(2050);
    t.update(2000.0, SECTION, VIEWPORT, 2050);
    assert_eq!(t.state(), TriggerState::Entering);
}

#[test]
fn killed_trigger_ignores_crossings() {
    let mut t = Trigger::new(entrance_rule(), 1);
    t.kill();
    t.update(1300.0, SECTION, VIEWPORT, 0);
    assert!(!t.tick(500));
    assert_eq!(t.state(), TriggerState::Idle);
    assert!(t.timeline().is_killed());
}

#[test]
fn toggle_actions_parse_from_four_tokens() {
    assert_eq!(
        "play none none reverse".parse::<ToggleActions>(),
        Ok(ToggleActions::default())
    );
    assert_eq!(
        "play reverse play reverse".parse::<ToggleActions>(),
        Ok(ToggleActions::IN_VIEW)
    );
    assert_eq!(
        "play none".parse::<ToggleActions>(),
        Err(ConfigError::ToggleActionCount(2))
    );
    assert_eq!(
        "play none none none none".parse::<ToggleActions>(),
        Err(ConfigError::ToggleActionCount(5))
    );
    assert!(matches!(
        "play none bounce reverse".parse::<ToggleActions>(),
        Err(ConfigError::UnknownToggleAction(a)) if a == "bounce"
    ));
}

#[test]
fn timeline_controls_follow_toggle_semantics() {
    let spec = TweenSpec::new(1000).with_from_to(Property::Scale, 0.8, 1.0);
    let mut tl = Timeline::new(spec, 1);

    ToggleAction::Complete.apply(&mut tl, 0);
    assert!(tl.is_at_end() && !tl.is_active());

    ToggleAction::Reverse.apply(&mut tl, 0);
    tl.tick(400);
    ToggleAction::Pause.apply(&mut tl, 400);
    tl.tick(900);
    assert_eq!(tl.playhead_ms(), 600);

    ToggleAction::Resume.apply(&mut tl, 900);
    assert_eq!(tl.playback(), Playback::Reverse);

    ToggleAction::Restart.apply(&mut tl, 1000);
    assert_eq!(tl.playhead_ms(), 0);
    assert_eq!(tl.playback(), Playback::Forward);

    ToggleAction::Reset.apply(&mut tl, 1100);
    assert!(tl.is_at_start() && !tl.is_active());

    // Playing at the end is a no-op.
    tl.complete();
    tl.play(2000);
    assert!(!tl.is_active());
}

#[test]
fn keyframes_loop_and_finish() {
    let bounce = Keyframes::new(Property::Y, [0.0, 10.0, 0.0], 2000)
        .unwrap()
        .with_repeat(Repeat::Infinite);
    assert_eq!(bounce.sample(0), 0.0);
    assert_close(bounce.sample(1000), 10.0);
    assert_close(bounce.sample(2000), 0.0);
    assert_close(bounce.sample(3000), 10.0);
    assert_close(bounce.sample(500), 5.0);
    assert!(!bounce.is_finished(1_000_000));

    let twice = Keyframes::new(Property::Opacity, [0.0, 1.0], 100)
        .unwrap()
        .with_easing(Easing::Linear)
        .with_repeat(Repeat::Count(1));
    assert_close(twice.sample(150), 0.5);
    assert!(twice.is_finished(200));
    assert_eq!(twice.sample(250), 1.0);

    assert_eq!(
        Keyframes::new(Property::Y, [1.0], 100),
        Err(ConfigError::TooFewKeyframes(1))
    );
}

#[test]
fn parallax_tracks_scroll_across_whole_range() {
    let rule = ScrubRule::parallax(Property::YPercent, -50.0).unwrap();
    let page = ElementBounds::new(0.0, 3000.0);
    let y_percent = |scroll_y| {
        rule.style_at(scroll_y, page, 1000.0)
            .resolved(Property::YPercent)
    };
    assert_eq!(y_percent(-5000.0), 0.0);
    assert_close(y_percent(1000.0), -25.0);
    assert_close(y_percent(2000.0), -37.5);
    assert_eq!(y_percent(3000.0), -50.0);
}

#[test]
fn easings_hit_their_endpoints() {
    let all = [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::Power1Out,
        Easing::Power2Out,
        Easing::Power3Out,
        Easing::Power3In,
        Easing::Power3InOut,
    ];
    for e in all {
        assert_eq!(e.sample(0.0), 0.0, "{e:?}");
        assert_eq!(e.sample(1.0), 1.0, "{e:?}");
        assert_eq!(e.sample(-1.0), 0.0, "{e:?}");
    }
    assert_close(Easing::Power3Out.sample(0.5), 0.9375);
    assert_close(Easing::Power3InOut.sample(0.5), 0.5);
    assert_eq!(Easing::from_name("power3.out"), Some(Easing::Power3Out));
    assert_eq!(Easing::from_name("none"), Some(Easing::Linear));
    assert_eq!(Easing::from_name("bounce.out"), None);
}

#[test]
fn style_merge_prefers_later_values() {
    let mut base = Style::EMPTY
        .with(Property::Y, -100.0)
        .with(Property::Opacity, 0.5);
    let overlay = Style::EMPTY
        .with(Property::Opacity, 0.9)
        .with(Property::Scale, 0.8);
    base.merge(&overlay);
    assert_eq!(base.get(Property::Y), Some(-100.0));
    assert_eq!(base.get(Property::Opacity), Some(0.9));
    assert_eq!(base.get(Property::Scale), Some(0.8));
    assert_eq!(base.resolved(Property::RotateX), 0.0);
    assert_eq!(base.iter().count(), 3);
    assert!(Style::EMPTY.is_empty());
}

#[test]
fn scroll_direction_from_offsets() {
    assert_eq!(
        ScrollDirection::between(10.0, 20.0),
        Some(ScrollDirection::Forward)
    );
    assert_eq!(
        ScrollDirection::between(20.0, 10.0),
        Some(ScrollDirection::Backward)
    );
    assert_eq!(ScrollDirection::between(5.0, 5.0), None);
}

// Integration tests for the two modulation strategies and the sampler.

use rand::prelude::*;
use wavefield_core::*;

const FRAME_DT: f32 = 1.0 / 60.0;

fn plain_lines(n: usize) -> Vec<LineSpec> {
    (0..n).map(|_| LineSpec::default()).collect()
}

fn running(config: FieldConfig, lines: Vec<LineSpec>) -> WaveEngine {
    let mut engine = WaveEngine::with_lines(config, lines).expect("valid config");
    engine.start();
    engine
}

fn energies(engine: &WaveEngine) -> Vec<f32> {
    engine
        .field()
        .as_coupled()
        .expect("coupled strategy")
        .energy()
        .to_vec()
}

#[test]
fn line_nearest_pointer_gathers_more_energy() {
    let config = FieldConfig {
        hover_radius: 220.0,
        ..FieldConfig::with_strategy(FieldStrategy::CoupledEnergy)
    };
    let mut engine = running(config, plain_lines(3));
    engine.handle_input(InputEvent::Moved { x: 100.0, y: 50.0 });
    for _ in 0..60 {
        engine.advance(FRAME_DT, 400.0, 120.0);
    }

    // Lines rest at 36, 60 and 84 px; 60 is nearest to y=50, 84 farthest.
    let e = energies(&engine);
    assert!(e[1] > e[2], "energies {:?}", e);
    assert!(e.iter().all(|v| *v > 0.0));
}

#[test]
fn energy_and_hover_stay_in_unit_range() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut engine = running(FieldConfig::default(), plain_lines(5));
    for _ in 0..2000 {
        match rng.gen_range(0..4) {
            0 => engine.handle_input(InputEvent::Left),
            _ => engine.handle_input(InputEvent::Moved {
                x: rng.gen_range(-500.0..900.0),
                y: rng.gen_range(-200.0..400.0),
            }),
        }
        let dt = rng.gen_range(0.0..0.5);
        engine.advance(dt, 400.0, 160.0);
        let hover = engine.pointer().hover();
        assert!((0.0..=1.0).contains(&hover));
        for e in energies(&engine) {
            assert!((0.0..=1.0).contains(&e), "energy out of range: {e}");
        }
        let field = engine.field().as_coupled().expect("coupled");
        assert!(field.velocity().iter().all(|v| v.is_finite()));
    }
}

#[test]
fn lone_line_decays_monotonically_after_pointer_leaves() {
    let mut engine = running(FieldConfig::default(), plain_lines(1));
    engine.handle_input(InputEvent::Moved { x: 200.0, y: 36.0 });
    for _ in 0..300 {
        engine.advance(FRAME_DT, 400.0, 120.0);
    }
    assert!(energies(&engine)[0] > 0.5);

    engine.handle_input(InputEvent::Left);
    let mut prev_e = energies(&engine)[0];
    let mut prev_h = engine.pointer().hover();
    for _ in 0..600 {
        engine.advance(FRAME_DT, 400.0, 120.0);
        let e = energies(&engine)[0];
        let h = engine.pointer().hover();
        assert!(e <= prev_e + 1e-6, "energy rose from {prev_e} to {e}");
        assert!(h <= prev_h + 1e-6, "hover rose from {prev_h} to {h}");
        prev_e = e;
        prev_h = h;
    }
    assert!(prev_e < 1e-3);
    assert!(prev_h < 1e-3);
}

#[test]
fn coupled_lines_settle_to_zero() {
    let mut engine = running(FieldConfig::default(), plain_lines(4));
    engine.handle_input(InputEvent::Moved { x: 180.0, y: 60.0 });
    for _ in 0..120 {
        engine.advance(FRAME_DT, 400.0, 120.0);
    }
    engine.handle_input(InputEvent::Left);
    for _ in 0..1200 {
        engine.advance(FRAME_DT, 400.0, 120.0);
    }
    for e in energies(&engine) {
        assert!(e < 1e-3, "residual energy {e}");
    }
}

#[test]
fn single_line_ignores_coupling() {
    let config = FieldConfig {
        coupling: 0.9,
        ..FieldConfig::default()
    };
    let mut engine = running(config, plain_lines(1));
    let positions = [(50.0, 40.0), (120.0, 10.0), (300.0, 90.0), (200.0, 36.0)];
    for (x, y) in positions {
        engine.handle_input(InputEvent::Moved { x, y });
        for _ in 0..10 {
            engine.advance(FRAME_DT, 400.0, 120.0);
            let field = engine.field().as_coupled().expect("coupled");
            let line_y = rest_y(0, 1, 120.0, engine.config().vertical_pad_fraction);
            let raw = proximity_target(engine.pointer(), 200.0, line_y, engine.config().hover_radius);
            assert_eq!(field.coupled_targets()[0], raw);
        }
    }
}

#[test]
fn coupled_target_uses_own_energy_at_edges() {
    let targets = [1.0, 0.0, 0.5];
    let energy = [0.2, 0.4, 0.8];
    // left edge: mean(0.2, 0.4) = 0.3
    assert!((coupled_target(&targets, &energy, 0, 0.5) - 0.65).abs() < 1e-6);
    // middle: mean(0.2, 0.8) = 0.5
    assert!((coupled_target(&targets, &energy, 1, 0.5) - 0.25).abs() < 1e-6);
    // right edge: mean(0.4, 0.8) = 0.6
    assert!((coupled_target(&targets, &energy, 2, 0.5) - 0.55).abs() < 1e-6);
}

#[test]
fn proximity_target_is_zero_when_inactive_or_far() {
    let mut p = PointerState::default();
    p.update(200.0, 60.0);
    assert!((proximity_target(&p, 200.0, 60.0, 220.0) - 1.0).abs() < 1e-6);
    assert_eq!(proximity_target(&p, 200.0, 400.0, 220.0), 0.0);
    p.deactivate();
    assert_eq!(proximity_target(&p, 200.0, 60.0, 220.0), 0.0);
}

#[test]
fn stalled_frame_behaves_like_clamped_frame() {
    let config = FieldConfig::default();
    let mut stalled = running(config.clone(), plain_lines(3));
    let mut steady = running(config, plain_lines(3));
    for engine in [&mut stalled, &mut steady] {
        engine.handle_input(InputEvent::Moved { x: 150.0, y: 60.0 });
    }
    for _ in 0..20 {
        let a = stalled.advance(5.0, 400.0, 120.0);
        let b = steady.advance(0.033, 400.0, 120.0);
        assert_eq!(energies(&stalled), energies(&steady));
        assert_eq!(a, b);
    }
    assert!((stalled.elapsed() - 20.0 * 0.033).abs() < 1e-4);
}

#[test]
fn identical_inputs_give_identical_frames() {
    for strategy in [FieldStrategy::CoupledEnergy, FieldStrategy::LensRipple] {
        let config = FieldConfig::with_strategy(strategy);
        let mut a = WaveEngine::new(config.clone()).expect("config");
        let mut b = WaveEngine::new(config).expect("config");
        a.start();
        b.start();
        let script = [
            vec![InputEvent::Moved { x: 10.0, y: 20.0 }],
            vec![],
            vec![InputEvent::Moved { x: 210.0, y: 80.0 }],
            vec![InputEvent::Left],
            vec![],
        ];
        for (i, inputs) in script.iter().cycle().take(50).enumerate() {
            let dt = 0.01 + (i % 3) as f32 * 0.01;
            assert_eq!(
                a.tick(dt, inputs, 640.0, 160.0),
                b.tick(dt, inputs, 640.0, 160.0)
            );
        }
    }
}

#[test]
fn wavelength_follows_surface_width() {
    for strategy in [FieldStrategy::CoupledEnergy, FieldStrategy::LensRipple] {
        let narrow_cfg = FieldConfig {
            sample_step: 4.0,
            ..FieldConfig::with_strategy(strategy)
        };
        let wide_cfg = FieldConfig {
            sample_step: 8.0,
            ..narrow_cfg.clone()
        };
        let mut narrow = running(narrow_cfg, LineSpec::generate(3, 5));
        let mut wide = running(wide_cfg, LineSpec::generate(3, 5));

        let (mut fn_, mut fw) = (Frame::default(), Frame::default());
        for _ in 0..30 {
            fn_ = narrow.advance(FRAME_DT, 400.0, 120.0);
            fw = wide.advance(FRAME_DT, 800.0, 120.0);
        }

        assert_eq!(fn_.commands.len(), fw.commands.len());
        for (n, w) in fn_.commands.iter().zip(&fw.commands) {
            assert_eq!(n.points.len(), w.points.len());
            for (pn, pw) in n.points.iter().zip(&w.points) {
                assert!((pn.x * 2.0 - pw.x).abs() < 1e-3);
                assert!((pn.y - pw.y).abs() < 1e-3, "{strategy:?}: {pn} vs {pw}");
            }
        }
    }
}

#[test]
fn spatial_frequency_gives_fixed_cycle_count() {
    let pointer = PointerState::default();
    for width in [100.0, 400.0, 1234.0] {
        let frame = FieldFrame {
            pointer: &pointer,
            width,
            height: 100.0,
            t: 0.0,
            dt: 0.0,
        };
        let cycles = frame.spatial_k(1.6) * width / std::f32::consts::TAU;
        assert!((cycles - 1.6).abs() < 1e-4);
    }
}

#[test]
fn sample_range_covers_both_edges() {
    for (width, step) in [(400.0, 4.0), (401.0, 4.0), (17.0, 5.0), (3.0, 10.0), (1000.0, 0.7)] {
        let xs: Vec<f32> = sample_xs(width, step).collect();
        let first = *xs.first().expect("samples");
        let last = *xs.last().expect("samples");
        assert!(first <= 0.0, "first {first} for {width}/{step}");
        assert!(last >= width, "last {last} for {width}/{step}");
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
    }
}

#[test]
fn lens_vanishes_when_pointer_inactive() {
    let mut engine = running(
        FieldConfig::with_strategy(FieldStrategy::LensRipple),
        plain_lines(2),
    );
    engine.advance(FRAME_DT, 400.0, 120.0);
    assert_eq!(engine.pointer().hover(), 0.0);

    let m = LocalModulation::Lens {
        pointer_x: 200.0,
        hover: 0.0,
        sigma: 140.0,
        strength: 1.6,
        ripple_amount: 0.9,
        ripple_freq: 0.035,
        ripple_offset: 0.4,
    };
    assert_eq!(m.at(200.0), (1.0, 0.0));
}

#[test]
fn lens_peaks_at_pointer_and_fades_with_distance() {
    let m = LocalModulation::Lens {
        pointer_x: 200.0,
        hover: 1.0,
        sigma: 100.0,
        strength: 2.0,
        ripple_amount: 0.5,
        ripple_freq: 0.05,
        ripple_offset: std::f32::consts::FRAC_PI_2,
    };
    let (peak, shift) = m.at(200.0);
    assert!((peak - 3.0).abs() < 1e-5);
    assert!((shift - 0.5).abs() < 1e-5);
    let (near, _) = m.at(250.0);
    let (far, _) = m.at(600.0);
    assert!(peak > near && near > far);
    assert!(far > 1.0, "gaussian support never truncates");
    assert!((gaussian(100.0, 100.0) - (-0.5f32).exp()).abs() < 1e-6);
}

#[test]
fn bulge_is_compact() {
    let m = LocalModulation::Bulge {
        pointer_x: 100.0,
        radius: 50.0,
        gain: 0.95,
    };
    assert!((m.at(100.0).0 - 1.95).abs() < 1e-6);
    assert_eq!(m.at(150.0), (1.0, 0.0));
    assert_eq!(m.at(400.0), (1.0, 0.0));
}

#[test]
fn energized_lines_advance_phase_faster() {
    let mut engine = running(FieldConfig::default(), plain_lines(3));
    let start: Vec<f32> = engine.field().as_coupled().expect("coupled").phase().to_vec();
    engine.handle_input(InputEvent::Moved { x: 200.0, y: 36.0 });
    for _ in 0..60 {
        engine.advance(FRAME_DT, 400.0, 120.0);
    }
    let field = engine.field().as_coupled().expect("coupled");
    let advanced: Vec<f32> = field
        .phase()
        .iter()
        .zip(&start)
        .map(|(p, s)| p - s)
        .collect();
    let idle = 60.0 * FRAME_DT * engine.config().base_speed;
    assert!(advanced[0] > idle);
    assert!(advanced[0] > advanced[2]);
}

fn assert_close(actual: f32, expected: f32) {
    let tol = 1e-4 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "actual {actual}, expected {expected}"
    );
}

fn jittered_line() -> LineSpec {
    LineSpec {
        phase_offset: 0.4,
        alpha: 0.8,
        vertical_offset_px: 3.0,
        amp_multiplier: 1.2,
        speed_multiplier: 0.9,
        freq_multiplier: 0.95,
    }
}

#[test]
fn coupled_energy_idle_amplitude_is_breathing_carrier() {
    let config = FieldConfig::default();
    let lines = vec![jittered_line()];
    let pointer = PointerState::default();
    let frame = FieldFrame {
        pointer: &pointer,
        width: 400.0,
        height: 120.0,
        t: 1.3,
        dt: 0.02,
    };
    let mut field = CoupledEnergyField::new(&lines);
    field.step(&frame, &config, &lines);
    let m = field.modulations(&frame, &config, &lines)[0];

    assert_eq!(field.energy()[0], 0.0);
    let breathe = 0.5 + 0.5 * (1.3 * config.breathe_speed).sin();
    let amp = config.base_amp * (1.0 + config.breathe_amp * breathe) * 1.2;
    assert_close(m.amplitude, amp);
    assert_close(m.phase, 0.4 + 0.02 * config.base_speed * 0.9);
    assert_close(m.k, std::f32::consts::TAU * config.base_freq / 400.0 * 0.95);
    assert_close(m.rest_y, 120.0 * config.vertical_pad_fraction + 3.0);
    assert_eq!(m.local, LocalModulation::None);

    let pts = sample_line(&m, 400.0, config.sample_step);
    let p = pts.iter().find(|p| p.x == 200.0).expect("sample at 200");
    assert_close(p.y, m.rest_y + (200.0 * m.k + m.phase).sin() * amp);
}

#[test]
fn coupled_energy_amplitude_adds_hover_term_and_bulge() {
    use wavefield_core::constants::{LOCAL_BOOST_GAIN, LOCAL_BOOST_RADIUS_SCALE};

    let config = FieldConfig::default();
    let lines = vec![jittered_line()];
    let mut pointer = PointerState::default();
    pointer.update(180.0, 39.0);
    let mut field = CoupledEnergyField::new(&lines);
    let mut t = 0.0;
    for _ in 0..20 {
        t += FRAME_DT;
        let frame = FieldFrame {
            pointer: &pointer,
            width: 400.0,
            height: 120.0,
            t,
            dt: FRAME_DT,
        };
        field.step(&frame, &config, &lines);
    }
    let frame = FieldFrame {
        pointer: &pointer,
        width: 400.0,
        height: 120.0,
        t,
        dt: FRAME_DT,
    };
    let m = field.modulations(&frame, &config, &lines)[0];
    let e = field.energy()[0];
    assert!(e > 0.1, "energy {e}");

    let breathe = 0.5 + 0.5 * (t * config.breathe_speed).sin();
    let amp = (config.base_amp * (1.0 + config.breathe_amp * breathe) + config.hover_amp * e) * 1.2;
    assert_close(m.amplitude, amp);
    let radius = config.hover_radius * LOCAL_BOOST_RADIUS_SCALE;
    assert_eq!(
        m.local,
        LocalModulation::Bulge {
            pointer_x: 180.0,
            radius,
            gain: LOCAL_BOOST_GAIN * e,
        }
    );

    let pts = sample_line(&m, 400.0, config.sample_step);
    let p = pts.iter().find(|p| p.x == 200.0).expect("sample at 200");
    let n = 1.0 - 20.0 / radius;
    let scale = 1.0 + LOCAL_BOOST_GAIN * e * n * n;
    assert_close(p.y, m.rest_y + (200.0 * m.k + m.phase).sin() * amp * scale);
}

#[test]
fn lens_amplitude_phase_and_ripple_follow_formulas() {
    use wavefield_core::constants::{
        LINE_PHASE_RIPPLE_SCALE, MICRO_WOBBLE_AMOUNT, MICRO_WOBBLE_PHASE_SCALE, MICRO_WOBBLE_SPEED,
    };

    let config = FieldConfig::with_strategy(FieldStrategy::LensRipple);
    let lines = vec![jittered_line()];
    let mut pointer = PointerState::default();
    pointer.update(170.0, 40.0);
    pointer.tick(0.5);
    assert_eq!(pointer.hover(), 0.5);

    let t = 2.0;
    let lp = 0.4;
    let frame = FieldFrame {
        pointer: &pointer,
        width: 400.0,
        height: 120.0,
        t,
        dt: FRAME_DT,
    };
    let m = LensField.modulations(&frame, &config, &lines)[0];

    let breathe = 1.0 + (t * config.breathe_speed + lp).sin() * config.lens_breathe_amount;
    let hover_factor = 1.0 + 0.5 * config.hover_amp_boost;
    let wobble =
        1.0 + MICRO_WOBBLE_AMOUNT * (t * MICRO_WOBBLE_SPEED + lp * MICRO_WOBBLE_PHASE_SCALE).sin();
    let amp = config.base_amp * 1.2 * breathe * hover_factor * wobble;
    assert_close(m.amplitude, amp);
    // Wobble is not negligible at this t, so dropping it would show.
    assert!((m.amplitude - amp / wobble).abs() > 1e-2);
    assert_close(m.phase, t * config.base_speed * 0.9 + lp);
    let ripple_offset = -t * config.ripple_speed + lp * LINE_PHASE_RIPPLE_SCALE;
    assert_eq!(
        m.local,
        LocalModulation::Lens {
            pointer_x: 170.0,
            hover: 0.5,
            sigma: config.lens_radius,
            strength: config.lens_strength,
            ripple_amount: config.ripple_amount,
            ripple_freq: config.ripple_freq,
            ripple_offset,
        }
    );

    let pts = sample_line(&m, 400.0, config.sample_step);
    let p = pts.iter().find(|p| p.x == 200.0).expect("sample at 200");
    let d = 30.0f32;
    let lens = 0.5 * (-(d * d) / (2.0 * config.lens_radius * config.lens_radius)).exp();
    let ripple = lens * config.ripple_amount * (d * config.ripple_freq + ripple_offset).sin();
    let y = m.rest_y + (200.0 * m.k + m.phase + ripple).sin() * amp * (1.0 + lens * config.lens_strength);
    assert_close(p.y, y);
}

#[test]
fn proximity_is_measured_to_the_drawn_line() {
    let config = FieldConfig::default();
    let lines = vec![LineSpec {
        vertical_offset_px: 40.0,
        ..LineSpec::default()
    }];
    // Slot at 30 px, drawn at 70 px.
    let mut pointer = PointerState::default();
    pointer.update(200.0, 70.0);
    let frame = FieldFrame {
        pointer: &pointer,
        width: 400.0,
        height: 100.0,
        t: 0.0,
        dt: FRAME_DT,
    };
    let mut field = CoupledEnergyField::new(&lines);
    field.step(&frame, &config, &lines);
    assert_eq!(field.coupled_targets()[0], 1.0);

    let m = field.modulations(&frame, &config, &lines)[0];
    assert_close(m.rest_y, 70.0);
    assert_close(line_y(0, 1, 100.0, &config, &lines[0]), 70.0);
}

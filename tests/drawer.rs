//! Draw engine integration tests.

use drawrs::{
    DrawOptions, DrawOutcome, DrawPhase, DrawUpdate, Drawer, OptionsError, ScriptedSource,
};

const ACTION: DrawOutcome = DrawOutcome::ActionCard;
const BODY: DrawOutcome = DrawOutcome::BodyPart;

/// Values that play out one roll: six flicker values, then the deciding value.
fn roll_values(flicker: f64, resolve: f64) -> Vec<f64> {
    let mut values = vec![flicker; 6];
    values.push(resolve);
    values
}

fn scripted(rolls: &[(f64, f64)]) -> Drawer<ScriptedSource> {
    scripted_with(DrawOptions::default(), rolls)
}

fn scripted_with(options: DrawOptions, rolls: &[(f64, f64)]) -> Drawer<ScriptedSource> {
    let values: Vec<f64> = rolls
        .iter()
        .flat_map(|&(flicker, resolve)| roll_values(flicker, resolve))
        .collect();
    Drawer::with_source(options, ScriptedSource::new(values).unwrap()).unwrap()
}

fn consumed(drawer: &Drawer<ScriptedSource>) -> usize {
    drawer.source.lock().consumed()
}

fn flicker_count(updates: &[DrawUpdate]) -> usize {
    updates
        .iter()
        .filter(|update| matches!(update, DrawUpdate::Flicker { .. }))
        .count()
}

#[test]
fn rejects_invalid_options() {
    let err = Drawer::new(DrawOptions::default().with_flicker_steps(0), 1).err();
    assert_eq!(err, Some(OptionsError::ZeroFlickerSteps));

    let err = Drawer::new(DrawOptions::default().with_action_card_probability(-0.1), 1).err();
    assert_eq!(err, Some(OptionsError::InvalidProbability));
}

#[test]
fn fresh_engine_is_idle() {
    let drawer = Drawer::new(DrawOptions::default(), 1).unwrap();
    let state = drawer.snapshot();

    assert_eq!(state.draws_taken, 0);
    assert!(state.draw_results.is_empty());
    assert_eq!(state.current_outcome, None);
    assert!(!state.is_animating);
    assert_eq!(state.preview_outcome, None);
    assert!(!state.auto_continue);
    assert_eq!(drawer.phase(), DrawPhase::Idle);
    assert_eq!(drawer.pending_timers(), 0);
}

#[test]
fn rolls_append_outcomes_in_call_order() {
    let drawer = scripted(&[(0.1, 0.7), (0.9, 0.2)]);

    drawer.request_draw();
    drawer.run_until_idle();
    assert_eq!(drawer.results(), vec![BODY]);
    assert_eq!(drawer.draws_taken(), 1);

    drawer.request_draw();
    drawer.run_until_idle();
    assert_eq!(drawer.results(), vec![BODY, ACTION]);
    assert_eq!(drawer.draws_taken(), 2);
    assert_eq!(drawer.current_outcome(), Some(ACTION));
}

#[test]
fn each_roll_flickers_exactly_six_times() {
    let drawer = Drawer::new(DrawOptions::default(), 99).unwrap();

    for _ in 0..50 {
        let mut updates = drawer.request_draw();
        updates.extend(drawer.run_until_idle());
        if updates == [DrawUpdate::TurnReset] {
            continue;
        }

        assert_eq!(flicker_count(&updates), 6);
        let steps: Vec<u8> = updates
            .iter()
            .filter_map(|update| match update {
                DrawUpdate::Flicker { step, .. } => Some(*step),
                _ => None,
            })
            .collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5, 6]);
        assert!(matches!(updates.last(), Some(DrawUpdate::Resolved { .. })));
    }
}

#[test]
fn flicker_preview_is_independent_of_result() {
    // 0.55 previews a body part on every step but still resolves to an action card.
    let drawer = scripted(&[(0.55, 0.55)]);
    drawer.request_draw();

    drawer.advance(100);
    assert_eq!(drawer.preview_outcome(), Some(BODY));
    assert!(drawer.is_animating());

    drawer.run_until_idle();
    assert_eq!(drawer.current_outcome(), Some(ACTION));
    assert_eq!(drawer.preview_outcome(), None);
    assert!(!drawer.is_animating());
}

#[test]
fn resolution_threshold_is_sixty_percent() {
    let drawer = scripted(&[(0.0, 0.599), (0.0, 0.6)]);
    assert_eq!(drawer.draw_now(), Some(ACTION));
    assert_eq!(drawer.draw_now(), Some(BODY));
}

#[test]
fn resolution_distribution_converges_to_sixty_forty() {
    let drawer = Drawer::new(DrawOptions::default(), 2024).unwrap();
    let trials = 20_000;
    let mut action = 0_u32;
    let mut resolved = 0_u32;
    let mut flicker_action = 0_u32;
    let mut flicker_total = 0_u32;

    while resolved < trials {
        let mut updates = drawer.request_draw();
        updates.extend(drawer.run_until_idle());
        for update in updates {
            match update {
                DrawUpdate::Resolved { outcome, .. } => {
                    resolved += 1;
                    if outcome == ACTION {
                        action += 1;
                    }
                }
                DrawUpdate::Flicker { preview, .. } => {
                    flicker_total += 1;
                    if preview == ACTION {
                        flicker_action += 1;
                    }
                }
                _ => {}
            }
        }
    }

    let action_ratio = f64::from(action) / f64::from(resolved);
    assert!(
        (action_ratio - 0.6).abs() < 0.02,
        "action ratio {action_ratio} too far from 0.6"
    );

    let flicker_ratio = f64::from(flicker_action) / f64::from(flicker_total);
    assert!(
        (flicker_ratio - 0.5).abs() < 0.01,
        "flicker ratio {flicker_ratio} too far from 0.5"
    );
}

#[test]
fn request_while_animating_is_ignored() {
    let drawer = scripted(&[(0.1, 0.1)]);
    drawer.request_draw();
    drawer.advance(250);

    let before = drawer.snapshot();
    let pending = drawer.pending_timers();

    assert!(drawer.request_draw().is_empty());
    assert_eq!(drawer.snapshot(), before);
    assert_eq!(drawer.pending_timers(), pending);

    let updates = drawer.run_until_idle();
    assert_eq!(flicker_count(&updates), 4);
    assert_eq!(drawer.draws_taken(), 1);
    assert_eq!(drawer.results(), vec![ACTION]);
}

#[test]
fn request_at_cap_resets_without_randomness() {
    let drawer = scripted(&[(0.1, 0.1), (0.1, 0.9)]);
    drawer.draw_now();
    drawer.draw_now();
    assert_eq!(drawer.draws_taken(), 2);

    let used = consumed(&drawer);
    let now = drawer.now();
    let updates = drawer.request_draw();

    assert_eq!(updates, vec![DrawUpdate::TurnReset]);
    assert_eq!(consumed(&drawer), used);
    assert_eq!(drawer.draws_taken(), 0);
    assert!(drawer.results().is_empty());
    assert_eq!(drawer.current_outcome(), None);
    assert!(!drawer.is_animating());
    assert_eq!(drawer.pending_timers(), 0);
    assert_eq!(drawer.now(), now);
}

#[test]
fn roll_timing_follows_flicker_interval() {
    let drawer = Drawer::new(DrawOptions::default(), 5).unwrap();
    drawer.request_draw();
    assert_eq!(drawer.next_deadline(), Some(100));

    assert!(drawer.advance(99).is_empty());
    assert_eq!(flicker_count(&drawer.advance(1)), 1);
    assert_eq!(drawer.now(), 100);

    let updates = drawer.advance(499);
    assert_eq!(flicker_count(&updates), 4);
    assert!(drawer.is_animating());

    let updates = drawer.advance(1);
    assert!(matches!(
        updates.as_slice(),
        [DrawUpdate::Flicker { step: 6, .. }, DrawUpdate::Resolved { draw_number: 1, .. }]
    ));
    assert_eq!(drawer.now(), 600);
}

#[test]
fn auto_continue_fires_second_roll() {
    let options = DrawOptions::default().with_auto_continue(true);
    let drawer = scripted_with(options, &[(0.1, 0.9), (0.1, 0.1)]);

    drawer.request_draw();
    drawer.advance(600);
    assert_eq!(drawer.draws_taken(), 1);
    assert!(!drawer.is_animating());
    assert_eq!(drawer.next_deadline(), Some(1_300));

    let updates = drawer.advance(700);
    assert_eq!(
        updates,
        vec![DrawUpdate::RollStarted {
            draw_number: 2,
            automatic: true
        }]
    );
    assert_eq!(drawer.phase(), DrawPhase::Rolling { draw_number: 2 });

    drawer.advance(600);
    assert_eq!(drawer.draws_taken(), 2);
    assert_eq!(drawer.results(), vec![BODY, ACTION]);
    assert_eq!(drawer.pending_timers(), 0);
    assert_eq!(drawer.phase(), DrawPhase::Resolved { draws_taken: 2 });
}

#[test]
fn auto_continue_flushes_without_wall_clock() {
    let options = DrawOptions::default().with_auto_continue(true);
    let drawer = Drawer::new(options, 11).unwrap();

    drawer.request_draw();
    let updates = drawer.run_until_idle();

    assert_eq!(flicker_count(&updates), 12);
    assert_eq!(drawer.draws_taken(), 2);
    assert_eq!(drawer.now(), 1_900);
}

#[test]
fn without_auto_continue_first_draw_waits() {
    let drawer = Drawer::new(DrawOptions::default(), 8).unwrap();
    drawer.request_draw();
    drawer.advance(600);
    assert_eq!(drawer.draws_taken(), 1);

    assert!(drawer.advance(60_000).is_empty());
    assert_eq!(drawer.draws_taken(), 1);
    assert_eq!(drawer.pending_timers(), 0);
    assert_eq!(drawer.phase(), DrawPhase::Resolved { draws_taken: 1 });
}

#[test]
fn manual_request_replaces_pending_auto_continue() {
    let options = DrawOptions::default().with_auto_continue(true);
    let drawer = scripted_with(options, &[(0.1, 0.1), (0.1, 0.9)]);

    drawer.draw_now();
    assert_eq!(drawer.pending_timers(), 1);

    let updates = drawer.request_draw();
    assert_eq!(
        updates,
        vec![DrawUpdate::RollStarted {
            draw_number: 2,
            automatic: false
        }]
    );

    drawer.run_until_idle();
    assert_eq!(drawer.draws_taken(), 2);
    assert_eq!(drawer.results(), vec![ACTION, BODY]);
    assert_eq!(consumed(&drawer), 14);
}

#[test]
fn disabling_auto_continue_cancels_pending_roll() {
    let options = DrawOptions::default().with_auto_continue(true);
    let drawer = Drawer::new(options, 4).unwrap();

    drawer.draw_now();
    assert_eq!(drawer.pending_timers(), 1);

    assert!(!drawer.toggle_auto_continue());
    assert_eq!(drawer.pending_timers(), 0);
    assert!(drawer.run_until_idle().is_empty());
    assert_eq!(drawer.draws_taken(), 1);
}

#[test]
fn enabling_auto_continue_after_first_draw_does_not_roll() {
    let drawer = Drawer::new(DrawOptions::default(), 4).unwrap();
    drawer.draw_now();

    assert_eq!(
        drawer.set_auto_continue(true),
        vec![DrawUpdate::AutoContinueChanged(true)]
    );
    assert!(drawer.run_until_idle().is_empty());
    assert_eq!(drawer.draws_taken(), 1);
}

#[test]
fn teardown_stops_all_pending_work() {
    let options = DrawOptions::default().with_auto_continue(true);
    let drawer = scripted_with(options, &[(0.1, 0.1)]);
    drawer.request_draw();
    drawer.advance(300);

    assert_eq!(drawer.teardown(), 1);
    let state = drawer.snapshot();
    assert!(!state.is_animating);
    assert_eq!(state.preview_outcome, None);
    assert_eq!(state.draws_taken, 0);

    let used = consumed(&drawer);
    assert!(drawer.advance(10_000).is_empty());
    assert_eq!(consumed(&drawer), used);
}

#[test]
fn teardown_during_auto_continue_delay_keeps_first_draw() {
    let options = DrawOptions::default().with_auto_continue(true);
    let drawer = scripted_with(options, &[(0.1, 0.9)]);

    assert_eq!(drawer.draw_now(), Some(BODY));
    assert_eq!(drawer.next_deadline(), Some(1_300));
    drawer.advance(300);

    assert_eq!(drawer.teardown(), 1);
    assert_eq!(drawer.pending_timers(), 0);

    let used = consumed(&drawer);
    assert!(drawer.advance(10_000).is_empty());
    assert!(drawer.run_until_idle().is_empty());
    assert_eq!(consumed(&drawer), used);
    assert_eq!(drawer.draws_taken(), 1);
    assert_eq!(drawer.results(), vec![BODY]);
    assert!(!drawer.is_animating());
}

#[test]
fn enabling_auto_continue_mid_roll_schedules_second_draw() {
    let drawer = scripted(&[(0.1, 0.1), (0.1, 0.9)]);
    drawer.request_draw();
    drawer.advance(300);

    assert_eq!(
        drawer.set_auto_continue(true),
        vec![DrawUpdate::AutoContinueChanged(true)]
    );
    assert!(drawer.is_animating());

    drawer.advance(300);
    assert_eq!(drawer.draws_taken(), 1);
    assert_eq!(drawer.next_deadline(), Some(1_300));

    let updates = drawer.advance(700);
    assert_eq!(
        updates,
        vec![DrawUpdate::RollStarted {
            draw_number: 2,
            automatic: true
        }]
    );

    drawer.run_until_idle();
    assert_eq!(drawer.draws_taken(), 2);
    assert_eq!(drawer.results(), vec![ACTION, BODY]);
}

#[test]
fn turn_scenario() {
    let drawer = Drawer::new(DrawOptions::default(), 42).unwrap();
    assert_eq!(drawer.draws_taken(), 0);

    let x = drawer.draw_now().unwrap();
    assert_eq!(drawer.results(), vec![x]);
    assert_eq!(drawer.draws_taken(), 1);

    let y = drawer.draw_now().unwrap();
    assert_eq!(drawer.results(), vec![x, y]);
    assert_eq!(drawer.draws_taken(), 2);

    assert_eq!(drawer.draw_now(), None);
    assert!(drawer.results().is_empty());
    assert_eq!(drawer.draws_taken(), 0);
    assert_eq!(drawer.phase(), DrawPhase::Idle);
}

#[test]
fn same_seed_replays_same_turns() {
    let a = Drawer::new(DrawOptions::default(), 77).unwrap();
    let b = Drawer::new(DrawOptions::default(), 77).unwrap();

    for _ in 0..30 {
        let mut left = a.request_draw();
        left.extend(a.run_until_idle());
        let mut right = b.request_draw();
        right.extend(b.run_until_idle());
        assert_eq!(left, right);
    }
}

#[test]
fn custom_turn_cap() {
    let options = DrawOptions::default()
        .with_draws_per_turn(3)
        .with_auto_continue(true);
    let drawer = Drawer::new(options, 13).unwrap();

    drawer.request_draw();
    drawer.run_until_idle();
    assert_eq!(drawer.draws_taken(), 3);
    assert_eq!(drawer.request_draw(), vec![DrawUpdate::TurnReset]);
}

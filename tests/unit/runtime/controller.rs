use super::*;
use crate::animation::ease::Easing;
use crate::transition::builders::fade;

fn spec() -> LayoutAnimationSpec {
    LayoutAnimationSpec::new(fade().duration_millis(300).easing(Easing::Linear))
        .with_delay_between_items(50)
}

#[test]
fn starts_idle_and_follows_the_target() {
    let mut state = EntranceState::default();
    assert_eq!(state.phase(), EntrancePhase::Idle);
    assert!(!state.is_going_to_visible());

    state.set_visible(true);
    assert_eq!(state.phase(), EntrancePhase::Animating);
    assert!(state.is_going_to_visible());
    assert!(!state.is_currently_visible());
}

#[test]
fn first_tick_records_segment_and_batch_start() {
    let mut state = EntranceState::default();
    state.set_visible(true);
    let clock = state.tick(1_000);
    assert_eq!(clock.play_time_millis(), Some(0));
    assert_eq!(clock.batch_start_millis(), Some(1_000));
    assert!(clock.heading_visible());

    let clock = state.tick(1_120);
    assert_eq!(clock.play_time_millis(), Some(120));
    assert_eq!(clock.batch_start_millis(), Some(1_000));
}

#[test]
fn settles_once_the_longest_item_is_done() {
    let mut state = EntranceState::default();
    state.set_visible(true);
    let clock = state.tick(0);
    assert!(!state.end_frame(&clock, 400));

    let clock = state.tick(399);
    assert!(!state.end_frame(&clock, 400));

    let clock = state.tick(400);
    assert!(state.end_frame(&clock, 400));
    assert_eq!(state.phase(), EntrancePhase::Settled);
    assert!(state.is_currently_visible());
    assert_eq!(state.tick(500).play_time_millis(), None);
}

#[test]
fn retargeting_resets_the_batch_start() {
    let mut state = EntranceState::default();
    state.set_visible(true);
    let first = state.tick(0);
    state.set_visible(false);
    let second = state.tick(100);
    assert_ne!(first.segment_id(), second.segment_id());
    assert_eq!(second.batch_start_millis(), Some(100));
    assert_eq!(second.play_time_millis(), Some(0));
    assert!(!second.heading_visible());
}

#[test]
fn setting_the_same_target_is_a_no_op() {
    let mut state = EntranceState::new(true);
    state.set_visible(true);
    assert_eq!(state.phase(), EntrancePhase::Idle);
    assert_eq!(state.tick(10).segment_id(), None);
}

#[test]
fn gate_window_grows_with_index() {
    let spec = spec();
    let mut state = EntranceState::default();
    assert!(state.tick(0).gate_open(&spec, 0));

    state.set_visible(true);
    state.tick(0);
    let clock = state.tick(300);
    assert!(clock.gate_open(&spec, 0));
    let clock = state.tick(301);
    assert!(!clock.gate_open(&spec, 0));
    assert!(clock.gate_open(&spec, 1));
    let clock = state.tick(351);
    assert!(!clock.gate_open(&spec, 1));
}

#[test]
fn seeking_holds_play_time_and_never_settles() {
    let spec = spec();
    let mut state = EntranceState::default();
    state.set_visible(true);
    state.tick(0);
    state.seek(120);
    let clock = state.tick(5_000);
    assert!(clock.is_seeking());
    assert_eq!(clock.play_time_millis(), Some(120));
    assert!(clock.gate_open(&spec, 0));
    assert!(!state.end_frame(&clock, 0));

    state.resume();
    let clock = state.tick(6_000);
    assert_eq!(clock.play_time_millis(), Some(120));
    let clock = state.tick(6_100);
    assert_eq!(clock.play_time_millis(), Some(220));
}

#[test]
fn seeking_a_settled_transition_replays_it() {
    let mut state = EntranceState::new(true);
    state.seek(50);
    assert_eq!(state.phase(), EntrancePhase::Animating);
    let clock = state.tick(0);
    assert!(clock.segment_id().is_some());
    assert_eq!(clock.play_time_millis(), Some(50));
}

#[test]
fn indices_are_assigned_once_per_key_and_never_reused() {
    let spec = spec();
    let mut state = EntranceState::default();
    let clock = state.tick(0);
    assert_eq!(state.enter_item(ItemKey(10), false, &clock, &spec).index, 0);
    assert_eq!(state.enter_item(ItemKey(20), false, &clock, &spec).index, 1);
    assert_eq!(state.enter_item(ItemKey(10), false, &clock, &spec).index, 0);
    state.end_frame(&clock, 0);

    let clock = state.tick(16);
    assert_eq!(state.enter_item(ItemKey(20), false, &clock, &spec).index, 1);
    state.end_frame(&clock, 0);
    assert_eq!(state.index_of(ItemKey(10)), None);
    assert_eq!(state.item_count(), 1);

    let clock = state.tick(32);
    assert_eq!(state.enter_item(ItemKey(10), false, &clock, &spec).index, 2);
    assert!(state.release(ItemKey(10)));
    assert!(!state.release(ItemKey(10)));
    assert_eq!(state.next_child(), 3);
}

#[test]
fn manual_claims_and_declared_items_share_one_counter() {
    let spec = spec();
    let mut state = EntranceState::default();
    assert_eq!(state.next_child(), 0);
    assert_eq!(state.next_child(), 1);

    let clock = state.tick(0);
    assert_eq!(state.enter_item(ItemKey(7), false, &clock, &spec).index, 2);
    assert_eq!(state.next_child(), 3);
    assert_eq!(state.enter_item(ItemKey(8), false, &clock, &spec).index, 4);
}

#[test]
fn lazy_items_skip_once_the_batch_has_settled() {
    let spec = spec();
    let mut state = EntranceState::default();
    state.set_visible(true);
    let clock = state.tick(0);
    assert!(!state.enter_item(ItemKey(1), true, &clock, &spec).skip);
    state.end_frame(&clock, 300);

    let clock = state.tick(300);
    state.enter_item(ItemKey(1), true, &clock, &spec);
    assert!(state.end_frame(&clock, 300));

    let clock = state.tick(900);
    state.enter_item(ItemKey(1), true, &clock, &spec);
    assert!(state.enter_item(ItemKey(2), true, &clock, &spec).skip);
    assert!(!state.enter_item(ItemKey(3), false, &clock, &spec).skip);
    state.end_frame(&clock, 0);

    state.set_visible(false);
    let clock = state.tick(1_000);
    assert!(!state.enter_item(ItemKey(2), true, &clock, &spec).skip);
}

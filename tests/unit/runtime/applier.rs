use super::*;
use crate::animation::ease::Easing;
use crate::runtime::controller::EntranceState;
use crate::transition::builders::{custom, expand, fade, scale, slide, translation_y};
use crate::transition::graph::{AnimationGraph, sequence};

const SIZE: IntSize = IntSize::new(100, 40);

fn linear_spec(graph: impl Into<AnimationGraph>) -> LayoutAnimationSpec {
    LayoutAnimationSpec::new(graph).with_delay_between_items(50)
}

/// Run one item at stagger `index` through the frames at `times`, returning the last frame.
fn run(spec: &LayoutAnimationSpec, index: usize, times: &[u64]) -> ItemFrame {
    let mut state = EntranceState::default();
    state.set_visible(true);
    let mut animator = ItemAnimator::new();
    let mut last = None;
    for &t in times {
        let clock = state.tick(t);
        last = Some(animator.frame(spec, &clock, index, false, SIZE));
    }
    last.expect("at least one frame")
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn first_of_type_applies_before_its_own_delay() {
    let spec = linear_spec(fade().duration_millis(100).easing(Easing::Linear));
    let frame = run(&spec, 3, &[0, 100]);
    assert!(frame.gate_open);
    assert!(approx(frame.layer.alpha, 0.0));
    assert_eq!(frame.end_millis, 250);

    let frame = run(&spec, 3, &[0, 200]);
    assert!(approx(frame.layer.alpha, 0.5));
}

#[test]
fn later_descriptor_of_the_same_class_waits_for_its_start() {
    let graph = fade().duration_millis(100).easing(Easing::Linear)
        + fade()
            .duration_millis(100)
            .delay_millis(200)
            .easing(Easing::Linear)
            .from(1.0)
            .to(0.5);
    let spec = linear_spec(graph);

    let frame = run(&spec, 0, &[0, 150]);
    assert!(approx(frame.layer.alpha, 1.0));
    let frame = run(&spec, 0, &[0, 250]);
    assert!(approx(frame.layer.alpha, 0.75));
}

#[test]
fn chained_descriptors_never_apply_early() {
    let graph = sequence(
        scale().duration_millis(100).easing(Easing::Linear),
        fade().duration_millis(100).easing(Easing::Linear),
    );
    let spec = linear_spec(graph);
    let frame = run(&spec, 0, &[0, 50]);
    assert!(approx(frame.layer.scale_x, 0.5));
    assert!(approx(frame.layer.alpha, 1.0));

    let frame = run(&spec, 0, &[0, 150]);
    assert!(approx(frame.layer.alpha, 0.5));
}

#[test]
fn expand_overrides_size_until_finished() {
    let spec = linear_spec(expand().duration_millis(100).easing(Easing::Linear));
    let frame = run(&spec, 0, &[0, 50]);
    assert_eq!(frame.layout.size, IntSize::new(50, 20));
    assert_eq!(frame.layout.alignment, Some(Alignment::BottomEnd));
    assert_eq!(frame.layout.place(SIZE), IntOffset::new(-50, -20));

    let frame = run(&spec, 0, &[0, 100]);
    assert_eq!(frame.layout, StructuralLayout::at_rest(SIZE));
}

#[test]
fn slide_moves_the_placement_offset() {
    let spec = linear_spec(slide().duration_millis(100).easing(Easing::Linear));
    let frame = run(&spec, 0, &[0]);
    assert_eq!(frame.layout.offset, IntOffset::new(0, -20));
    assert_eq!(frame.layout.place(SIZE), IntOffset::new(0, -20));
    let frame = run(&spec, 0, &[0, 50]);
    assert_eq!(frame.layout.offset, IntOffset::new(0, -10));
    assert!(frame.layer.is_identity());
    let corner = frame.content_transform(SIZE) * kurbo::Point::new(100.0, 40.0);
    assert!(approx(corner.x, 100.0));
    assert!(approx(corner.y, 30.0));
}

#[test]
fn content_transform_places_then_applies_the_layer() {
    let spec = linear_spec(
        slide().duration_millis(100).easing(Easing::Linear)
            + translation_y().from(8.0).to(0.0).duration_millis(100).easing(Easing::Linear),
    );
    let frame = run(&spec, 0, &[0, 50]);
    assert_eq!(frame.layout.offset, IntOffset::new(0, -10));
    assert!(approx(frame.layer.translation_y, 4.0));

    let origin = frame.content_transform(SIZE) * kurbo::Point::ORIGIN;
    assert!(approx(origin.x, 0.0));
    assert!(approx(origin.y, -6.0));
}

#[test]
fn lookahead_size_drives_relative_endpoints() {
    let spec = linear_spec(translation_y().duration_millis(100).easing(Easing::Linear));
    let mut state = EntranceState::default();
    state.set_visible(true);
    let mut animator = ItemAnimator::new();
    animator.set_lookahead(IntSize::new(100, 80));
    let clock = state.tick(0);
    let frame = animator.frame(&spec, &clock, 0, false, IntSize::new(100, 10));
    assert!(approx(frame.layer.translation_y, -80.0));
}

#[test]
fn closed_gate_and_skip_render_at_rest() {
    let spec = linear_spec(fade().duration_millis(100) + slide().duration_millis(100));
    let mut state = EntranceState::default();
    state.set_visible(true);
    let mut skipped = ItemAnimator::new();
    let clock = state.tick(0);
    let frame = skipped.frame(&spec, &clock, 0, true, SIZE);
    assert!(!frame.gate_open);
    assert!(approx(frame.layer.alpha, 1.0));
    assert_eq!(frame.layout.offset, IntOffset::ZERO);
    assert_eq!(frame.end_millis, 0);

    let frame = run(&spec, 0, &[0, 10, 101]);
    assert!(!frame.gate_open);
    assert!(approx(frame.layer.alpha, 1.0));
}

#[test]
fn custom_and_scale_write_the_layer() {
    let graph = scale().duration_millis(100).easing(Easing::Linear)
        + custom(|layer, v| layer.rotation_z = 90.0 * (1.0 - v))
            .duration_millis(100)
            .easing(Easing::Linear);
    let spec = linear_spec(graph);
    let frame = run(&spec, 0, &[0, 50]);
    assert!(approx(frame.layer.scale_x, 0.5));
    assert!(approx(frame.layer.scale_y, 0.5));
    assert!(approx(frame.layer.rotation_z, 45.0));
}

#[test]
fn graph_change_rebinds_runners() {
    let mut state = EntranceState::default();
    state.set_visible(true);
    let mut animator = ItemAnimator::new();
    let clock = state.tick(0);
    let fade_spec = linear_spec(fade().duration_millis(100));
    animator.frame(&fade_spec, &clock, 0, false, SIZE);

    let slide_spec = linear_spec(slide().duration_millis(100).easing(Easing::Linear));
    let frame = animator.frame(&slide_spec, &clock, 0, false, SIZE);
    assert_eq!(frame.layout.offset, IntOffset::new(0, -20));
}

use super::*;
use crate::animation::ease::Easing;
use crate::transition::builders::{fade, scale, slide};
use crate::transition::descriptor::{PropertyClass, TransitionKind};

fn fade_ms(millis: u64) -> AnimationGraph {
    fade().duration_millis(millis).easing(Easing::Linear).into()
}

#[test]
fn together_duration_is_the_max() {
    let g = together(fade_ms(300), scale().duration_millis(500));
    assert_eq!(g.len(), 2);
    assert_eq!(g.duration(), 500);
    assert_eq!(together(fade_ms(500), fade_ms(300)).duration(), 500);
}

#[test]
fn sequence_duration_is_the_sum() {
    let g = sequence(fade_ms(300), fade_ms(200));
    assert_eq!(g.duration(), 500);
    let offsets: Vec<u64> = g
        .descriptors()
        .iter()
        .map(TransitionDescriptor::sequence_offset_millis)
        .collect();
    assert_eq!(offsets, vec![0, 300]);
}

#[test]
fn sequence_tags_only_the_later_group() {
    let g = fade_ms(300).then(slide().duration_millis(100) + scale());
    let classes: Vec<PropertyClass> = g
        .descriptors()
        .iter()
        .map(TransitionDescriptor::property_class)
        .collect();
    assert_eq!(
        classes,
        vec![
            PropertyClass::Fade,
            PropertyClass::Sequence,
            PropertyClass::Sequence
        ]
    );
    assert_eq!(g.descriptors()[1].kind(), TransitionKind::Slide);
    assert_eq!(g.duration(), 600);
}

#[test]
fn sequence_is_not_commutative() {
    let ab = sequence(fade_ms(300), scale().duration_millis(100));
    let ba = sequence(scale().duration_millis(100), fade_ms(300));
    assert_ne!(ab, ba);
    assert_eq!(ab.descriptors()[1].sequence_offset_millis(), 300);
    assert_eq!(ba.descriptors()[1].sequence_offset_millis(), 100);
}

#[test]
fn nested_sequences_accumulate_offsets() {
    let g = sequence_all([fade_ms(100), fade_ms(200), fade_ms(300)]);
    let offsets: Vec<u64> = g
        .descriptors()
        .iter()
        .map(TransitionDescriptor::sequence_offset_millis)
        .collect();
    assert_eq!(offsets, vec![0, 100, 300]);
    assert_eq!(g.duration(), 600);
    assert_eq!(g.descriptors()[0].property_class(), PropertyClass::Fade);
}

#[test]
fn composition_is_pure_and_repeatable() {
    let a = together(fade_ms(300), scale());
    let b = fade_ms(150);
    let first = sequence(a.clone(), b.clone());
    let second = sequence(a.clone(), b.clone());
    assert_eq!(first, second);
    assert_eq!(first.duration(), second.duration());
    assert_eq!(a.descriptors()[0].sequence_offset_millis(), 0);
    assert_eq!(b.descriptors()[0].property_class(), PropertyClass::Fade);
}

#[test]
fn plus_is_together() {
    let plus = fade_ms(300) + scale();
    let explicit = together(fade_ms(300), scale());
    assert_eq!(plus.len(), explicit.len());
    assert_eq!(plus.duration(), explicit.duration());
    assert_eq!(together_all([fade_ms(10), fade_ms(20), fade_ms(30)]).len(), 3);
    assert!(sequence_all(Vec::<AnimationGraph>::new()).is_empty());
}

#[test]
fn spec_duration_adds_initial_delay() {
    let spec = LayoutAnimationSpec::new(sequence(fade_ms(300), fade_ms(300)))
        .with_initial_delay(40)
        .with_delay_between_items(25);
    assert_eq!(spec.duration(), 640);
    assert_eq!(spec.item_delay_millis(0), 40);
    assert_eq!(spec.item_delay_millis(4), 140);
    assert_eq!(spec.stagger_delay_millis(0), 0);
    assert_eq!(spec.stagger_delay_millis(3), 75);
}

#[test]
fn spec_duration_ignores_stagger_and_multiplies_repeats_only() {
    let repeated = fade()
        .duration_millis(100)
        .delay_millis(20)
        .repeat(3, crate::animation::timing::RepeatMode::Restart);
    let spec =
        LayoutAnimationSpec::new(sequence(fade_ms(50), repeated)).with_delay_between_items(1_000);
    assert_eq!(spec.duration(), 50 + 360);
}

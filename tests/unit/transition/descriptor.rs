use super::*;

fn fade_descriptor(duration_millis: u64) -> TransitionDescriptor {
    TransitionDescriptor::new(
        TransitionKind::Fade,
        Endpoints::Float {
            from: 0.0.into(),
            to: 1.0.into(),
        },
        Timing {
            duration_millis,
            ..Timing::default()
        },
        TransformOrigin::CENTER,
        Alignment::default(),
        None,
    )
}

#[test]
fn kind_fixes_class_domain_and_structural_flag() {
    assert_eq!(TransitionKind::Fade.property_class(), PropertyClass::Fade);
    assert_eq!(TransitionKind::Slide.value_domain(), ValueDomain::Offset);
    assert_eq!(TransitionKind::Expand.value_domain(), ValueDomain::Size);
    assert_eq!(TransitionKind::RotationX.value_domain(), ValueDomain::Float);
    assert!(TransitionKind::Slide.is_structural());
    assert!(TransitionKind::Expand.is_structural());
    assert!(!TransitionKind::TranslationY.is_structural());
    assert!(!TransitionKind::Custom.is_structural());
}

#[test]
fn relative_sources_resolve_against_full_size() {
    let full = IntSize::new(200, 80);
    assert_eq!(
        ValueSource::<IntSize>::fraction(0.5, 1.0).resolve(full),
        IntSize::new(100, 80)
    );
    assert_eq!(
        ValueSource::<IntOffset>::fraction(0.0, -0.5).resolve(full),
        IntOffset::new(0, -40)
    );
    assert_eq!(ValueSource::from(3.5).resolve(full), 3.5);
}

#[test]
fn relative_sources_compare_by_identity() {
    let a = ValueSource::<f64>::relative(|s| f64::from(s.width));
    let b = ValueSource::<f64>::relative(|s| f64::from(s.width));
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    assert_ne!(a, ValueSource::Fixed(0.0));
}

#[test]
fn chaining_tags_sequence_and_accumulates_offset() {
    let d = fade_descriptor(300);
    assert_eq!(d.property_class(), PropertyClass::Fade);
    assert_eq!(d.end_millis(), 300);

    let chained = d.chained_after(300).chained_after(100);
    assert_eq!(chained.property_class(), PropertyClass::Sequence);
    assert_eq!(chained.kind(), TransitionKind::Fade);
    assert_eq!(chained.sequence_offset_millis(), 400);
    assert_eq!(chained.end_millis(), 700);
    assert_eq!(d.sequence_offset_millis(), 0);
}

#[test]
fn custom_apply_mutates_layer() {
    let apply = CustomApply::new(|layer, v| layer.alpha = v * 0.5);
    let mut layer = LayerProps::default();
    apply.apply(&mut layer, 1.0);
    assert_eq!(layer.alpha, 0.5);
}

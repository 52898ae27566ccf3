use super::*;

fn float_endpoints(d: &TransitionDescriptor, full: IntSize) -> (f64, f64) {
    match d.endpoints() {
        Endpoints::Float { from, to } => (from.resolve(full), to.resolve(full)),
        other => panic!("expected float endpoints, got {other:?}"),
    }
}

fn size_endpoints(d: &TransitionDescriptor, full: IntSize) -> (IntSize, IntSize) {
    match d.endpoints() {
        Endpoints::Size { from, to } => (from.resolve(full), to.resolve(full)),
        other => panic!("expected size endpoints, got {other:?}"),
    }
}

#[test]
fn defaults_match_the_documented_ranges() {
    let full = IntSize::new(120, 40);
    assert_eq!(float_endpoints(&fade().build(), full), (0.0, 1.0));
    assert_eq!(float_endpoints(&scale().build(), full), (0.0, 1.0));
    assert_eq!(float_endpoints(&rotation_z().build(), full), (-90.0, 0.0));
    assert_eq!(float_endpoints(&rotation_x().build(), full), (90.0, 0.0));
    assert_eq!(float_endpoints(&translation_x().build(), full), (-120.0, 0.0));
    assert_eq!(float_endpoints(&translation_y().build(), full), (-40.0, 0.0));
    assert_eq!(float_endpoints(&custom(|_, _| {}).build(), full), (0.0, 1.0));

    let d = fade().build();
    assert_eq!(d.timing().duration_millis, 300);
    assert_eq!(d.timing().easing, Easing::FastOutSlowIn);
    assert_eq!(d.origin(), TransformOrigin::CENTER);
}

#[test]
fn slide_starts_half_a_height_above() {
    let d = slide().build();
    assert!(d.is_structural());
    match d.endpoints() {
        Endpoints::Offset { from, to } => {
            assert_eq!(from.resolve(IntSize::new(50, 60)), IntOffset::new(0, -30));
            assert_eq!(to.resolve(IntSize::new(50, 60)), IntOffset::ZERO);
        }
        other => panic!("unexpected endpoints {other:?}"),
    }
}

#[test]
fn expand_variants_pin_the_expected_edges() {
    let full = IntSize::new(100, 30);
    let both = expand().build();
    assert_eq!(size_endpoints(&both, full), (IntSize::ZERO, full));
    assert_eq!(both.alignment(), Alignment::BottomEnd);

    let h = expand_horizontally().build();
    assert_eq!(size_endpoints(&h, full), (IntSize::new(0, 30), full));
    assert_eq!(h.alignment(), Alignment::CenterEnd);

    let v = expand_vertically().build();
    assert_eq!(size_endpoints(&v, full), (IntSize::new(100, 0), full));
    assert_eq!(v.alignment(), Alignment::BottomCenter);
}

#[test]
fn builder_overrides_timing_and_values() {
    let d = fade()
        .duration_millis(120)
        .delay_millis(30)
        .easing(Easing::Linear)
        .repeat(2, RepeatMode::Reverse)
        .from(0.25)
        .to_fn(|full| f64::from(full.width) / 100.0)
        .build();
    assert_eq!(d.timing().duration(), 300);
    assert_eq!(d.timing().repeat_mode, RepeatMode::Reverse);
    assert_eq!(float_endpoints(&d, IntSize::new(50, 0)), (0.25, 0.5));

    let pivoted = scale().origin(TransformOrigin::new(0.0, 1.0)).build();
    assert_eq!(pivoted.origin(), TransformOrigin::new(0.0, 1.0));
}

#[test]
fn custom_keeps_its_closure() {
    let d = custom(|layer, v| layer.rotation_z = v * 10.0).build();
    let mut layer = LayerProps::default();
    d.custom().expect("custom apply").apply(&mut layer, 0.5);
    assert_eq!(layer.rotation_z, 5.0);
}

use super::*;
use kurbo::Point;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn default_is_identity() {
    let layer = LayerProps::default();
    assert!(layer.is_identity());
    assert_eq!(layer.to_affine(IntSize::new(40, 20)), Affine::IDENTITY);
}

#[test]
fn scale_keeps_the_pivot_fixed() {
    let layer = LayerProps {
        scale_x: 0.5,
        scale_y: 0.5,
        ..LayerProps::IDENTITY
    };
    let a = layer.to_affine(IntSize::new(100, 50));
    assert!(close(a * Point::new(50.0, 25.0), Point::new(50.0, 25.0)));
    assert!(close(a * Point::new(0.0, 0.0), Point::new(25.0, 12.5)));
}

#[test]
fn rotation_uses_the_transform_origin() {
    let layer = LayerProps {
        rotation_z: 90.0,
        transform_origin: TransformOrigin::new(0.0, 0.0),
        ..LayerProps::IDENTITY
    };
    let a = layer.to_affine(IntSize::new(10, 10));
    assert!(close(a * Point::new(10.0, 0.0), Point::new(0.0, 10.0)));
}

#[test]
fn edge_on_tilt_collapses_an_axis() {
    let layer = LayerProps {
        rotation_x: 90.0,
        translation_x: 7.0,
        ..LayerProps::IDENTITY
    };
    let a = layer.to_affine(IntSize::new(20, 20));
    let p = a * Point::new(0.0, 0.0);
    assert!((p.y - 10.0).abs() < 1e-9);
    assert!((p.x - 7.0).abs() < 1e-9);
}

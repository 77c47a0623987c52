//! End-to-end: wire records in, bodies built, sample poses masked

use planning_environment::prelude::*;

fn wire_cube(half: f64) -> WireShape {
    let corners = [
        (-half, -half, -half),
        (half, -half, -half),
        (half, half, -half),
        (-half, half, -half),
        (-half, -half, half),
        (half, -half, half),
        (half, half, half),
        (-half, half, half),
    ];
    WireShape::mesh(
        corners.iter().map(|&(x, y, z)| WirePoint::new(x, y, z)).collect(),
        vec![
            0, 2, 1, 0, 3, 2, 4, 5, 6, 4, 6, 7, 0, 1, 5, 0, 5, 4,
            2, 3, 7, 2, 7, 6, 1, 2, 6, 1, 6, 5, 3, 0, 4, 3, 4, 7,
        ],
    )
}

#[test]
fn wire_shapes_to_mask() {
    planning_environment::foundation::logging::init();

    let wires = vec![
        (WireShape::new(WireShape::SPHERE, vec![0.5]), WirePose::from_position(WirePoint::new(1.0, 0.0, 0.0))),
        (WireShape::new(WireShape::BOX, vec![1.0, 1.0, 1.0]), WirePose::from_position(WirePoint::new(0.0, 3.0, 0.0))),
        (wire_cube(0.5), WirePose::from_position(WirePoint::new(0.0, 0.0, 5.0))),
    ];

    let shapes: Vec<Shape> = wires.iter().map(|(w, _)| construct_object(w)).collect::<Result<_, _>>().unwrap();
    let poses: Vec<Isometry3> = wires.iter().map(|(_, p)| p.to_isometry()).collect();

    let config = PlanningConfig::default();
    let bodies = config.body_vector(shapes.iter().zip(poses.iter().copied())).unwrap();
    assert_eq!(bodies.count(), 3);

    let samples = [
        Isometry3::translation(1.0, 0.0, 0.0),
        Isometry3::translation(0.2, 3.2, -0.2),
        Isometry3::translation(0.1, 0.1, 5.1),
        Isometry3::translation(0.0, 0.0, 0.0),
        Isometry3::translation(0.0, 0.0, 6.0),
    ];
    let expected = vec![false, false, false, true, true];
    assert_eq!(mask_poses_inside_body_vectors(&samples, std::slice::from_ref(&bodies), false), expected);
    assert_eq!(mask_poses_inside_body_vectors(&samples, &[bodies], true), expected);
}

#[test]
fn shapes_survive_clone_dispose_and_reserialize() {
    let wires = [
        WireShape::new(WireShape::SPHERE, vec![0.25]),
        WireShape::new(WireShape::CYLINDER, vec![0.1, 0.8]),
        wire_cube(1.0),
    ];
    let mut shapes: Vec<Shape> = wires.iter().map(|w| construct_object(w).unwrap()).collect();
    let copies = clone_shape_vector(&shapes);
    dispose_shape_vector(&mut shapes);
    assert!(shapes.is_empty());

    let back: Vec<WireShape> = copies.iter().map(|s| construct_object_msg(s, 0.0).unwrap()).collect();
    assert_eq!(back, wires);
}

#[test]
fn transform_conversions_agree_with_isometries() {
    let poses = [
        WirePose::from_position(WirePoint::new(1.0, 2.0, 3.0)),
        WirePose::default(),
    ];
    let affine = poses_to_affine(&poses);
    for (a, p) in affine.iter().zip(&poses) {
        let origin = a.transform_point(&Point3::origin());
        assert_eq!(origin.coords, p.to_isometry().translation.vector);
    }

    let vectors = vectors_to_vector3(&[WireVector3::new(0.0, -1.0, 2.5)]);
    assert_eq!(vectors, vec![Vec3::new(0.0, -1.0, 2.5)]);
}

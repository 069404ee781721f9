use bezier_spline::{pt, BezierSpline, JointMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MODES: [JointMode; 3] = [JointMode::Free, JointMode::Aligned, JointMode::Mirrored];

/// Apply one random edit, the way an interactive editor would.
fn random_edit(spline: &mut BezierSpline, rng: &mut StdRng) {
    match rng.gen_range(0..10) {
        0 => spline.add_segment(),
        1 => spline.set_loop(!spline.is_loop()),
        2 | 3 => {
            let index = rng.gen_range(0..spline.point_count());
            let mode = MODES[rng.gen_range(0..MODES.len())];
            spline.set_joint_mode(index, mode).unwrap();
        }
        _ => {
            let index = rng.gen_range(0..spline.point_count());
            let point = pt!(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0)
            );
            spline.set_point(index, point).unwrap();
        }
    }
}

/// Check every constrained joint whose handles both have some length.
fn assert_joints_satisfied(spline: &BezierSpline) {
    let points = spline.points();
    let last_joint = spline.modes().len() - 1;

    for (joint, mode) in spline.modes().iter().enumerate() {
        if *mode == JointMode::Free || (!spline.is_loop() && (joint == 0 || joint == last_joint)) {
            continue;
        }
        let middle = joint * 3;
        let before = if middle == 0 { points.len() - 2 } else { middle - 1 };
        let after = if middle + 1 >= points.len() { 1 } else { middle + 1 };

        let incoming = points[middle] - points[before];
        let outgoing = points[after] - points[middle];
        if incoming.norm() < 1e-9 || outgoing.norm() < 1e-9 {
            continue;
        }

        match mode {
            JointMode::Mirrored => {
                assert!(
                    (incoming - outgoing).norm() < 1e-6,
                    "joint {} is not mirrored: {:?} vs {:?}",
                    joint,
                    incoming,
                    outgoing
                );
            }
            JointMode::Aligned => {
                let cos = incoming.normalize().dot(&outgoing.normalize());
                assert!(cos > 1.0 - 1e-6, "joint {} is not aligned", joint);
            }
            JointMode::Free => unreachable!(),
        }
    }
}

#[test]
fn test_random_edits_keep_invariants() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut spline = BezierSpline::new();

        for _ in 0..200 {
            random_edit(&mut spline, &mut rng);

            assert_eq!(spline.point_count() % 3, 1);
            assert_eq!(spline.point_count(), 3 * spline.segment_count() + 1);
            assert_eq!(spline.modes().len(), spline.segment_count() + 1);
            if spline.is_loop() {
                let last = spline.point_count() - 1;
                assert_eq!(spline.point(0).unwrap(), spline.point(last).unwrap());
                assert_eq!(spline.modes()[0], spline.modes()[spline.modes().len() - 1]);
            }
            assert_joints_satisfied(&spline);
        }
    }
}

#[test]
fn test_mode_change_satisfies_the_joint() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let mut spline = BezierSpline::new();
        for _ in 0..3 {
            spline.add_segment();
        }
        for index in 0..spline.point_count() {
            let point = pt!(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0)
            );
            spline.set_point(index, point).unwrap();
        }
        if rng.gen_bool(0.5) {
            spline.set_loop(true);
        }

        let joint = rng.gen_range(0..spline.modes().len());
        let mode = MODES[rng.gen_range(1..MODES.len())];
        spline.set_joint_mode(joint * 3, mode).unwrap();

        assert_joints_satisfied(&spline);
    }
}

use approx::assert_relative_eq;
use bezier_spline::modules::decorate::decorate;
use bezier_spline::modules::export::json::to_json;
use bezier_spline::modules::export::svg_path::ToSvgPath;
use bezier_spline::modules::parse::json::from_json;
use bezier_spline::modules::parse::svg_path::FromSvgPath;
use bezier_spline::modules::sample::polyline;
use bezier_spline::modules::walker::{SplineWalker, WalkerConfig, WalkerMode};
use bezier_spline::{pt, BezierSpline, JointMode};

#[test]
fn test_complete_workflow() {
    // Start from path data drawn elsewhere
    let mut spline = BezierSpline::from_svg_path("M0,0 C0,2 2,2 2,0 C2,-2 4,-2 4,0").unwrap();
    assert_eq!(spline.segment_count(), 2);

    // Smooth the middle joint, then keep editing
    spline.set_joint_mode(3, JointMode::Mirrored).unwrap();
    spline.add_segment();
    spline.set_point(9, pt!(6, 0, 1)).unwrap();
    assert_eq!(spline.point_count(), 10);
    assert_eq!(spline.modes()[3], JointMode::Free);

    // Store and reload
    let reloaded = from_json(&to_json(&spline).unwrap()).unwrap();
    assert_eq!(reloaded, spline);

    // Walk along it from a host loop
    let mut walker = SplineWalker::new(WalkerConfig {
        duration: 3.0,
        look_forward: true,
        mode: WalkerMode::Once,
    })
    .unwrap();
    let mut last = walker.pose(&reloaded);
    for _ in 0..30 {
        last = walker.step(&reloaded, 0.1);
    }
    assert_relative_eq!(walker.progress(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(last.position, pt!(6, 0, 1), epsilon = 1e-9);

    // Draw and decorate it
    assert_eq!(polyline(&reloaded, 10).len(), 31);
    assert_eq!(decorate(&reloaded, 3, 2).len(), 6);

    // The exported path starts where the imported one did
    assert!(reloaded.to_svg_path().starts_with("M0,0 C0,2,2,2,2,0"));
}

#[test]
fn test_closing_a_loop_keeps_the_seam_smooth() {
    let mut spline = BezierSpline::new();
    spline.add_segment();
    spline.set_point(3, pt!(4, 3, 0)).unwrap();
    spline.set_joint_mode(0, JointMode::Mirrored).unwrap();
    spline.set_loop(true);

    let last = spline.point_count() - 1;
    assert_eq!(spline.point(0).unwrap(), spline.point(last).unwrap());
    assert_eq!(spline.joint_mode(last).unwrap(), JointMode::Mirrored);

    // the curve leaves the seam in the direction it arrived
    assert_relative_eq!(spline.tangent(0.0), spline.tangent(1.0), epsilon = 1e-9);
    assert_relative_eq!(spline.velocity(0.0), spline.velocity(1.0), epsilon = 1e-9);
}

use super::*;

fn sample() -> Curve {
    Curve::from_pairs(
        2,
        &[(0.0, 0.0), (1.0, 2.5), (3.0, -4.0), (6.0, 0.5)],
    )
    .unwrap()
}

#[test]
fn swap_axes_exchanges_coordinates() {
    let swapped = swap_axes(&sample());
    assert_eq!(swapped.knots(), 2);
    assert_eq!(swapped.points()[1], Point::new(2.5, 1.0));
    assert_eq!(swapped.points()[2], Point::new(-4.0, 3.0));
}

#[test]
fn mirrors_negate_one_axis() {
    let c = sample();
    let my = mirror_y(&c);
    let mx = mirror_x(&c);
    for ((p, y), x) in c.points().iter().zip(my.points()).zip(mx.points()) {
        assert_eq!(*y, Point::new(p.x, -p.y));
        assert_eq!(*x, Point::new(-p.x, p.y));
    }
}

#[test]
fn transforms_are_involutions_and_leave_input_untouched() {
    let c = sample();
    let before = c.clone();
    assert_eq!(swap_axes(&swap_axes(&c)), c);
    assert_eq!(mirror_y(&mirror_y(&c)), c);
    assert_eq!(mirror_x(&mirror_x(&c)), c);
    assert_eq!(c, before);
}

//! Algebraic properties that must hold for all inputs, checked on seeded random samples.

use glmath::{
    assert_approx_eq,
    ulp::{float_distance, next_float},
    vec2, vec3, vec4, Mat3d, Quatd, Vec3d, Vec3f, Vec4f, Vector,
};

const SEED: u64 = 0x6a09e667f3bcc908;
const SAMPLES: usize = 200;

fn random_vec<const N: usize>(rng: &mut fastrand::Rng) -> Vector<f64, N> {
    Vector::from_fn(|_| rng.f64() * 20.0 - 10.0)
}

fn random_rotation(rng: &mut fastrand::Rng) -> Quatd {
    let axis = loop {
        let axis: Vec3d = random_vec(rng);
        if axis.length() > 0.1 {
            break axis.normalize();
        }
    };
    Quatd::from_axis_angle(rng.f64() * 6.0 - 3.0, axis)
}

fn random_quat(rng: &mut fastrand::Rng) -> Quatd {
    Quatd::from_vec(random_vec(rng))
}

fn check_add_sub<const N: usize>(rng: &mut fastrand::Rng)
where
    glmath::Dim<N>: glmath::Functor<N>,
{
    let a = Vector::<i32, N>::from_fn(|_| rng.i32(-1000..1000));
    let b = Vector::<i32, N>::from_fn(|_| rng.i32(-1000..1000));
    assert_eq!(a + b - b, a);

    let a: Vector<f64, N> = random_vec(rng);
    let b: Vector<f64, N> = random_vec(rng);
    assert_approx_eq!(a + b - b, a).ulps(64).abs(1e-14);
    assert!((a.equal(a)).all());
    assert!(!(a.not_equal(a)).any());
}

#[test]
fn vector_add_sub() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..SAMPLES {
        check_add_sub::<1>(&mut rng);
        check_add_sub::<2>(&mut rng);
        check_add_sub::<3>(&mut rng);
        check_add_sub::<4>(&mut rng);
    }
}

#[test]
fn vector_composition() {
    let v = Vec3f::from((vec2(1.0, 2.0), 3.0));
    assert_eq!((v.x, v.y, v.z), (1.0, 2.0, 3.0));
    assert_eq!(Vec4f::from((v, 4.0)), vec4(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn quat_dot_length() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..SAMPLES {
        let q = random_quat(&mut rng);
        assert_approx_eq!(q.dot(q), q.length() * q.length()).rel(1e-14);
        assert_eq!(q.conjugate().conjugate(), q);
        assert_approx_eq!(q.inverse() * q, Quatd::IDENTITY).abs(1e-14);
        assert_approx_eq!(q * q.inverse(), Quatd::IDENTITY).abs(1e-14);
    }
}

#[test]
fn rotation_matrix_round_trip() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..SAMPLES {
        let m = random_rotation(&mut rng).to_mat3();
        assert_approx_eq!(m.determinant(), 1.0).abs(1e-12);
        assert_approx_eq!(m * m.transpose(), Mat3d::IDENTITY).abs(1e-12);

        let q = Quatd::from_mat3(m);
        assert_approx_eq!(q.length(), 1.0).abs(1e-12);
        assert_approx_eq!(q.to_mat3(), m).abs(1e-12);
    }
}

#[test]
fn slerp_degenerate_and_short_path() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..SAMPLES {
        let q = random_rotation(&mut rng);
        for a in [0.0, 0.25, 0.5, 1.0] {
            assert_approx_eq!(q.slerp(q, a), q).abs(1e-12);
        }
        assert_approx_eq!(q.slerp(-q, 0.5), q.slerp(q, 0.5)).abs(1e-12);

        // Every point on the short arc is at most half a turn of the quaternion sphere away from
        // the start, i.e. a rotation angle of at most π.
        let r = random_rotation(&mut rng);
        let path = q.conjugate() * q.slerp(r, 0.5);
        assert!(path.w >= -1e-12, "{q:?} -> {r:?}");
    }
}

#[test]
fn ulp_steps() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..SAMPLES {
        let x = f32::from_bits(rng.u32(..));
        if !x.is_finite() || x == f32::MAX {
            continue;
        }
        assert_eq!(float_distance(x, next_float(x)), 1, "{x:e}");
        assert_eq!(float_distance(x, x), 0);

        let y = f64::from_bits(rng.u64(..));
        if y.is_finite() && y != f64::MAX {
            assert_eq!(float_distance(y, next_float(y)), 1, "{y:e}");
        }
    }
}

#[test]
fn quarter_turn_about_y() {
    let m = Quatd::from_axis_angle(std::f64::consts::FRAC_PI_2, Vec3d::Y).to_mat3();
    assert_approx_eq!(m * Vec3d::X, vec3(0.0, 0.0, -1.0)).abs(1e-6);
}

use approx::assert_relative_eq;
use planar::Vector2;
use rand::{thread_rng, Rng};
use std::{
    collections::HashSet,
    hash::{Hash, Hasher},
};

const ROUNDS: usize = 1000;

fn random_float(rng: &mut impl Rng, bound: f32) -> f32 {
    rng.gen_range(-bound, bound)
}

fn random_vector(rng: &mut impl Rng) -> Vector2 {
    Vector2::new(random_float(rng, 1000.0), random_float(rng, 1000.0))
}

/// Vectors with small integer components, where float arithmetic on them is exact
fn random_integer_vector(rng: &mut impl Rng) -> Vector2 {
    let x: i32 = rng.gen_range(-100, 100);
    let y: i32 = rng.gen_range(-100, 100);
    Vector2::new(x as f32, y as f32)
}

#[test]
fn length_is_root_of_length_squared() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let v = random_vector(&mut rng);
        assert_relative_eq!(
            v.length(),
            v.length_squared().sqrt(),
            max_relative = 1e-6
        );
    }
}

#[test]
fn normalized_has_unit_length() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let v = random_vector(&mut rng);
        if v == Vector2::zero() {
            continue;
        }
        assert_relative_eq!(v.normalized().length(), 1.0, epsilon = 1e-5);

        let mut in_place = v;
        in_place.normalize();
        assert_eq!(in_place, v.normalized());
    }
}

#[test]
fn normalizing_zero_is_noop() {
    assert_eq!(Vector2::zero().normalized(), Vector2::zero());
    let mut v = Vector2::default();
    v.normalize();
    assert_eq!(v, Vector2::zero());
}

#[test]
fn addition_commutes_and_subtraction_anticommutes() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        assert_eq!(a.add(b), b.add(a));
        assert_eq!(a.subtract(b), b.subtract(a).negate());
        assert_eq!(a.dot(b), b.dot(a));
    }
}

#[test]
fn repeated_scaling_matches_single_scaling() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let v = random_vector(&mut rng);
        let s1 = random_float(&mut rng, 10.0);
        let s2 = random_float(&mut rng, 10.0);
        let twice = v.multiply(s1).multiply(s2);
        let once = v.multiply(s1 * s2);
        assert_relative_eq!(twice.x, once.x, epsilon = 1e-3, max_relative = 1e-5);
        assert_relative_eq!(twice.y, once.y, epsilon = 1e-3, max_relative = 1e-5);
    }
}

#[test]
fn lerp_hits_both_ends() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        assert_eq!(a.lerp(b, 0.0), a);

        let a = random_integer_vector(&mut rng);
        let b = random_integer_vector(&mut rng);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}

#[test]
fn clamp_stays_in_range() {
    let mut rng = thread_rng();
    let min = Vector2::new(-10.0, 0.0);
    let max = Vector2::new(10.0, 5.0);
    for _ in 0..ROUNDS {
        let v = random_vector(&mut rng).clamp(min, max);
        assert!(v.x >= min.x && v.x <= max.x);
        assert!(v.y >= min.y && v.y <= max.y);
        assert_eq!(v.maximize(min).minimize(max), v);
    }
}

#[test]
fn operators_delegate_to_named_forms() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let s = random_float(&mut rng, 10.0);
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.subtract(b));
        assert_eq!(-a, a.negate());
        assert_eq!(a * s, a.multiply(s));
        assert_eq!(s * a, a.multiply(s));
        assert_eq!(a / s, a.divide(s));
    }
}

#[test]
fn distance_is_symmetric() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        assert_eq!(a.distance_to(b), b.distance_to(a));
        assert_eq!(a.distance_to(b), (b - a).length());
    }
}

#[test]
fn concrete_cases() {
    assert_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
    assert_eq!(
        Vector2::new(5.0, -2.0).clamp(Vector2::new(0.0, 0.0), Vector2::new(10.0, 10.0)),
        Vector2::new(5.0, 0.0)
    );
    assert_eq!(
        Vector2::new(1.0, -1.0).reflect(Vector2::new(0.0, 1.0)),
        Vector2::new(1.0, 1.0)
    );
    assert!(Vector2::new(1.0, 2.0) == Vector2::new(1.0, 2.0));
    assert!(Vector2::new(1.0, 2.0) != Vector2::new(1.0, 3.0));
    assert_eq!(Vector2::new(1.5, 2.0).to_string(), "X:1.5 Y:2");
}

#[test]
fn equal_vectors_collapse_in_a_set() {
    let set: HashSet<_> = vec![
        Vector2::new(1.0, 2.0),
        Vector2::new(1.0, 2.0),
        Vector2::new(-0.0, 0.0),
        Vector2::new(0.0, -0.0),
        Vector2::new(2.0, 1.0),
    ]
    .into_iter()
    .map(HashedVector)
    .collect();
    assert_eq!(set.len(), 3);
}

#[test]
fn text_and_bytes_round_trip() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let v = random_vector(&mut rng);
        assert_eq!(v.to_string().parse::<Vector2>(), Ok(v));
        assert_eq!(Vector2::from_le_bytes(v.to_le_bytes()), v);
    }
}

/// `HashSet` needs `Eq`, which `Vector2` can't implement because of `NaN`
#[derive(Debug)]
struct HashedVector(Vector2);

impl PartialEq for HashedVector {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for HashedVector {}

impl Hash for HashedVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

use euclid_vector::{
    cosine_similarity,
    utils::generate_random_vectors,
    vector::Vector,
};

#[test]
fn test_core_functionality() {
    // Test vector creation
    let vector = Vector::from(vec![1.0, 2.0, 3.0]);
    assert_eq!(vector.num_dimensions(), 3);

    // Test arithmetic
    let doubled = (&vector + &vector).unwrap();
    assert_eq!(doubled, &vector * 2);
    assert_eq!((&doubled - &vector).unwrap(), vector);

    // Test dot product and norm agree
    let dot = (&vector * &vector).unwrap();
    assert_eq!(dot.sqrt(), vector.euclidean_norm());

    // Test formatting
    assert_eq!(doubled.to_string(), "[2 4 6]");
}

#[test]
fn test_distance_metrics() {
    let v1 = Vector::from(vec![1.0, 0.0, 0.0]);
    let v2 = Vector::from(vec![0.0, 1.0, 0.0]);

    let cosine = cosine_similarity(&v1, &v2).unwrap();
    assert_eq!(cosine, 0.0); // Perpendicular vectors
}

#[test]
fn test_random_unit_vectors() {
    let vectors = generate_random_vectors(64, 10);
    for vector in &vectors {
        let unit = vector.create_unit_vector();
        assert!((unit.euclidean_norm() - 1.0).abs() < 1e-9);
    }
}

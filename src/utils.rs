use crate::{vector::Vector, Result};
use rand::Rng;

pub fn cosine_similarity(v1: &Vector, v2: &Vector) -> Result<f64> {
    let dot_product = v1.dot(v2)?;
    let norm1 = v1.euclidean_norm();
    let norm2 = v2.euclidean_norm();

    if norm1 == 0.0 || norm2 == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm1 * norm2))
    }
}

pub fn euclidean_distance(v1: &Vector, v2: &Vector) -> Result<f64> {
    Ok((v1 - v2)?.euclidean_norm())
}

pub fn manhattan_distance(v1: &Vector, v2: &Vector) -> Result<f64> {
    let diff = (v1 - v2)?;
    Ok(diff.iter().map(|x| x.abs()).sum())
}

pub fn generate_random_vectors(dimension: usize, num: usize) -> Vec<Vector> {
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| {
            (0..dimension)
                .map(|_| rng.gen_range(-1.0_f64..1.0))
                .collect::<Vector>()
        })
        .collect()
}

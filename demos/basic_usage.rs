use euclid_vector::{euclidean_distance, Vector, VectorError};

fn main() -> anyhow::Result<()> {
    println!("Euclidean vector demo");

    let a = Vector::from(vec![3.0, 4.0]);
    let b = Vector::with_fill(2, 1.0);
    println!("a = {}, b = {}", a, b);

    let sum = (&a + &b)?;
    println!("a + b = {}", sum);
    println!("a - b = {}", (&a - &b)?);
    println!("a . b = {}", (&a * &b)?);
    println!("2 * a = {}", 2 * &a);
    println!("a / 2 = {}", &a / 2);

    println!("|a| = {}", a.euclidean_norm());
    println!("unit(a) = {:.3}", a.create_unit_vector());
    println!("distance(a, b) = {:.4}", euclidean_distance(&a, &b)?);

    // Mismatched dimensions come back as an error
    let c = Vector::zeros(3);
    match &a + &c {
        Err(VectorError::DimensionMismatch { expected, got }) => {
            println!("cannot add: dimension {} vs {}", expected, got);
        }
        other => anyhow::bail!("unexpected result: {:?}", other),
    }

    let mut moved_from = sum;
    let taken = moved_from.take();
    println!("taken = {}, moved-from = {}", taken, moved_from);

    let list: std::collections::LinkedList<f64> = (&taken).into();
    println!("as list: {:?}", list);

    Ok(())
}

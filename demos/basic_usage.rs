use std::collections::LinkedList;

use anyhow::Result;
use evec::{euclidean_distance, Vector};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .parse_env(env_logger::Env::default().filter_or("EVEC_LOG", "evec=debug"))
        .init();

    println!("=== Euclidean Vector Demo ===\n");

    // Construction
    let a = Vector::from([1.0, 2.0, 3.0]);
    let b: Vector = vec![4.0, 5.0, 6.0].into();
    let list: LinkedList<f64> = [3.0, 4.0].into_iter().collect();
    let mut c = Vector::from(list);
    println!("a = {}, b = {}, c = {}", a, b, c);
    println!("filled = {}", Vector::filled(4, 0.5));
    println!("empty = {}\n", Vector::with_dimension(0));

    // Arithmetic
    println!("a + b = {}", a.checked_add(&b)?);
    println!("b - a = {}", &b - &a);
    println!("a . b = {}", a.dot(&b)?);
    println!("2 * a = {}", 2.0 * &a);
    println!("a / 4 = {:.2}", &a / 4.0);
    println!("|a - b| = {:.4}\n", euclidean_distance(&a, &b)?);

    // Norm memoization
    println!("|c| = {}", c.euclidean_norm());
    c.log_info();
    c[0] = 5.0;
    c.set(1, 12.0)?;
    println!("after mutation |c| = {}", c.euclidean_norm());
    println!("unit(c) = {}\n", c.unit_vector());

    // Copy and move
    let copy = c.clone();
    let moved = c.take();
    println!("copy = {}, moved = {}, source = {}", copy, moved, c);
    println!("{}", c.info());

    if let Err(e) = a.checked_add(&moved) {
        println!("\nexpected failure: {}", e);
    }

    Ok(())
}

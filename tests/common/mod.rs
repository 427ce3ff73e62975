use rand::Rng;

fn digits(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10)))
        .collect()
}

/// A valid identifier in one of the accepted shapes.
pub fn random_identifier(rng: &mut impl Rng) -> String {
    let subscriber = format!("{}{}", rng.gen_range(1..10), digits(rng, 8));
    match rng.gen_range(0..5) {
        0 => digits(rng, 13),
        1 => subscriber,
        2 => format!("0{subscriber}"),
        3 => format!("66{subscriber}"),
        _ => {
            let len = rng.gen_range(15..40);
            digits(rng, len)
        }
    }
}

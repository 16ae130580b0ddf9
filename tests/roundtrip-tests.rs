use mdpc_mceliece::{
    gf::{FiniteField, Gf4},
    keys::{generate_key_pair, PrivateKey},
    parameters::{BLOCK_LENGTH, BLOCK_WEIGHT, ERROR_WEIGHT, MAX_ITERATIONS},
    random::{get_rng_from_seed, random_vector, random_weighted_vector, Seed},
    syndrome::Syndrome,
};

const MID_BLOCK_LENGTH: usize = 101;
const MID_BLOCK_WEIGHT: usize = 7;
const MID_ITERATIONS: usize = 50;

fn add_vectors(codeword: &[Gf4], error: &[Gf4]) -> Vec<Gf4> {
    codeword
        .iter()
        .zip(error)
        .map(|(&symbol, &injected)| symbol + injected)
        .collect()
}

fn residual_is_codeword(
    private_key: &PrivateKey<Gf4>,
    ciphertext: &[Gf4],
    error_vector: &[Gf4],
) -> bool {
    let residual: Vec<Gf4> = ciphertext
        .iter()
        .zip(error_vector)
        .map(|(&received, &error)| received - error)
        .collect();
    Syndrome::compute(private_key, &residual).is_zero()
}

#[test]
fn tiny_key_pair_round_trip() {
    let mut rng = get_rng_from_seed(Seed::new([61u8; 32]));
    let (public_key, private_key) = generate_key_pair::<Gf4, _>(7, 3, &mut rng).unwrap();
    let mut message = vec![Gf4::zero(); 7];
    message[0] = Gf4::one();
    let codeword = public_key.encode(&message).unwrap();
    let error_vector = private_key
        .decode(&codeword, 10)
        .unwrap()
        .expect("error-free ciphertext must decode");
    assert_eq!(error_vector, vec![Gf4::zero(); 14]);
}

#[test]
fn mid_size_round_trip_without_errors() {
    let mut rng = get_rng_from_seed(Seed::new([62u8; 32]));
    let (public_key, private_key) =
        generate_key_pair::<Gf4, _>(MID_BLOCK_LENGTH, MID_BLOCK_WEIGHT, &mut rng).unwrap();
    for _ in 0..5 {
        let message: Vec<Gf4> = random_vector(MID_BLOCK_LENGTH, &mut rng);
        let codeword = public_key.encode(&message).unwrap();
        let error_vector = private_key
            .decode(&codeword, MID_ITERATIONS)
            .unwrap()
            .expect("error-free ciphertext must decode");
        assert!(error_vector.iter().all(Gf4::is_zero));
    }
}

#[test]
fn mid_size_single_error_is_recovered() {
    let mut rng = get_rng_from_seed(Seed::new([63u8; 32]));
    let (public_key, private_key) =
        generate_key_pair::<Gf4, _>(MID_BLOCK_LENGTH, MID_BLOCK_WEIGHT, &mut rng).unwrap();
    let message: Vec<Gf4> = random_vector(MID_BLOCK_LENGTH, &mut rng);
    let codeword = public_key.encode(&message).unwrap();
    for _ in 0..10 {
        let injected: Vec<Gf4> =
            random_weighted_vector(2 * MID_BLOCK_LENGTH, 1, &mut rng).unwrap();
        let ciphertext = add_vectors(&codeword, &injected);
        let error_vector = private_key
            .decode(&ciphertext, MID_ITERATIONS)
            .unwrap()
            .expect("single errors must decode");
        assert!(residual_is_codeword(&private_key, &ciphertext, &error_vector));
        assert_eq!(error_vector, injected);
    }
}

#[test]
fn mid_size_error_injection_trials() {
    let mut rng = get_rng_from_seed(Seed::new([64u8; 32]));
    let (public_key, private_key) =
        generate_key_pair::<Gf4, _>(MID_BLOCK_LENGTH, MID_BLOCK_WEIGHT, &mut rng).unwrap();
    let trials = 10;
    let mut recovered = 0;
    for _ in 0..trials {
        let message: Vec<Gf4> = random_vector(MID_BLOCK_LENGTH, &mut rng);
        let codeword = public_key.encode(&message).unwrap();
        let injected: Vec<Gf4> =
            random_weighted_vector(2 * MID_BLOCK_LENGTH, 3, &mut rng).unwrap();
        let ciphertext = add_vectors(&codeword, &injected);
        if let Some(error_vector) = private_key.decode(&ciphertext, MID_ITERATIONS).unwrap() {
            assert!(residual_is_codeword(&private_key, &ciphertext, &error_vector));
            if error_vector == injected {
                recovered += 1;
            }
        }
    }
    assert!(
        recovered >= 7,
        "recovered only {recovered}/{trials} weight-3 error vectors"
    );
}

// The recommended-parameter tests exercise r = 2339 and are slow without
// optimizations; run them with `cargo test --release -- --ignored`.

#[test]
#[ignore]
fn recommended_parameters_round_trip() {
    let mut rng = get_rng_from_seed(Seed::new([65u8; 32]));
    let (public_key, private_key) =
        generate_key_pair::<Gf4, _>(BLOCK_LENGTH, BLOCK_WEIGHT, &mut rng).unwrap();
    let message: Vec<Gf4> = random_vector(BLOCK_LENGTH, &mut rng);
    let codeword = public_key.encode(&message).unwrap();
    let error_vector = private_key
        .decode(&codeword, MAX_ITERATIONS)
        .unwrap()
        .expect("error-free ciphertext must decode");
    assert!(error_vector.iter().all(Gf4::is_zero));
}

#[test]
#[ignore]
fn recommended_parameters_error_injection() {
    let mut rng = get_rng_from_seed(Seed::new([66u8; 32]));
    let (public_key, private_key) =
        generate_key_pair::<Gf4, _>(BLOCK_LENGTH, BLOCK_WEIGHT, &mut rng).unwrap();
    let trials = 5;
    let mut recovered = 0;
    for _ in 0..trials {
        let message: Vec<Gf4> = random_vector(BLOCK_LENGTH, &mut rng);
        let codeword = public_key.encode(&message).unwrap();
        let injected: Vec<Gf4> =
            random_weighted_vector(2 * BLOCK_LENGTH, ERROR_WEIGHT, &mut rng).unwrap();
        let ciphertext = add_vectors(&codeword, &injected);
        if let Some(error_vector) = private_key.decode(&ciphertext, MAX_ITERATIONS).unwrap() {
            assert!(residual_is_codeword(&private_key, &ciphertext, &error_vector));
            if error_vector == injected {
                recovered += 1;
            }
        }
    }
    assert!(
        recovered >= 4,
        "recovered only {recovered}/{trials} weight-{ERROR_WEIGHT} error vectors"
    );
}

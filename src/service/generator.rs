//! Random, checksum-valid document generation.
//!
//! Used to seed forms and fixtures in non-production environments.

use rand::Rng;

use crate::service::checksum;
use crate::service::cnpj::{self, CNPJ_LEN, Cnpj};
use crate::service::cpf::{self, CPF_LEN, Cpf};

/// Branch number assigned to a company's headquarters.
const HEADQUARTERS_BRANCH: [u8; 4] = [0, 0, 0, 1];

/// Generate a random valid CPF.
pub fn generate_cpf<R: Rng + ?Sized>(rng: &mut R) -> Cpf {
    loop {
        let mut digits = [0u8; CPF_LEN];
        for digit in &mut digits[..CPF_LEN - 2] {
            *digit = rng.random_range(0..10);
        }
        checksum::complete(&mut digits, cpf::check_digit_for);

        if !checksum::is_repeated(&digits) {
            return Cpf::from_valid_digits(digits);
        }
    }
}

/// Generate a random valid headquarters CNPJ (branch `0001`).
pub fn generate_cnpj<R: Rng + ?Sized>(rng: &mut R) -> Cnpj {
    let mut digits = [0u8; CNPJ_LEN];
    for digit in &mut digits[..8] {
        *digit = rng.random_range(0..10);
    }
    digits[8..12].copy_from_slice(&HEADQUARTERS_BRANCH);
    checksum::complete(&mut digits, cnpj::check_digit_for);

    // The fixed branch rules out a repeated-digit sequence.
    Cnpj::from_valid_digits(digits)
}

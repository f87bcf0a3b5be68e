//! Service layer module.
//!
//! Contains the CPF/CNPJ validators, the generator, and the service that
//! fronts them for the API.

pub mod checksum;
pub mod cnpj;
pub mod cpf;
pub mod generator;
pub mod validator;

pub use cnpj::{Cnpj, check_cnpj, validate_cnpj};
pub use cpf::{Cpf, check_cpf, validate_cpf};
pub use generator::{generate_cnpj, generate_cpf};
pub use validator::ValidationService;

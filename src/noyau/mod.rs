//! Noyau exact : polynômes creux à plusieurs variables
//!
//! Organisation interne :
//! - poly.rs     : type Poly/Mono + forme canonique + degrés + égalité
//! - arith.rs    : +, ×, −, puissance (+ opérateurs Rust)
//! - subst.rs    : valeur en un point, composition
//! - format.rs   : affichage (PRINT), relisible
//! - nombres.rs  : numéraux bornés (BigInt -> i64 / i32 / u64)
//! - lecture.rs  : littéral texte -> Poly
//! - erreur.rs   : Malforme / HorsBornes

pub mod arith;
pub mod erreur;
pub mod format;
pub mod lecture;
pub mod nombres;
pub mod poly;
pub mod subst;



#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurLecture;
pub use lecture::lire_poly;
pub use poly::{Coeff, Exp, Mono, Poly};

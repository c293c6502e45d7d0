// src/noyau/nombres.rs
//
// Numéraux bornés (coefficients, exposants, arguments de commande).
// D’abord la grammaire (chiffres ASCII, '-' éventuel), ensuite la valeur :
// lecture en BigInt puis conversion contrôlée. Échec de conversion => HorsBornes.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use super::erreur::ErreurLecture;
use super::poly::{Coeff, Exp};

fn est_chiffres(s: &[u8]) -> bool {
    !s.is_empty() && s.iter().all(u8::is_ascii_digit)
}

/// Coefficient := '-'? Chiffre+ (sur TOUTE la plage).
pub fn est_coeff(s: &[u8]) -> bool {
    match s {
        [b'-', reste @ ..] => est_chiffres(reste),
        _ => est_chiffres(s),
    }
}

fn lire_big(s: &[u8]) -> Result<BigInt, ErreurLecture> {
    BigInt::parse_bytes(s, 10).ok_or(ErreurLecture::Malforme)
}

/// Coefficient signé (i64).
pub fn lire_coeff(s: &[u8]) -> Result<Coeff, ErreurLecture> {
    if !est_coeff(s) {
        return Err(ErreurLecture::Malforme);
    }
    lire_big(s)?.to_i64().ok_or(ErreurLecture::HorsBornes)
}

/// Exposant : chiffres seulement, dans [0, i32::MAX].
pub fn lire_exp(s: &[u8]) -> Result<Exp, ErreurLecture> {
    if !est_chiffres(s) {
        return Err(ErreurLecture::Malforme);
    }
    lire_big(s)?.to_i32().ok_or(ErreurLecture::HorsBornes)
}

/// Entier non signé (indices de variable, nombre de substitutions).
pub fn lire_indice(s: &[u8]) -> Result<u64, ErreurLecture> {
    if !est_chiffres(s) {
        return Err(ErreurLecture::Malforme);
    }
    lire_big(s)?.to_u64().ok_or(ErreurLecture::HorsBornes)
}

// src/noyau/erreur.rs
//
// Deux échecs possibles à la lecture d’un littéral :
// - Malforme   : la grammaire n’est pas respectée
// - HorsBornes : numéral bien écrit, mais trop grand pour Coeff / Exp / l’argument

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErreurLecture {
    #[error("littéral mal formé")]
    Malforme,
    #[error("numéral hors bornes")]
    HorsBornes,
}

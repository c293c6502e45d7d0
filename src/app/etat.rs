//! src/app/etat.rs
//!
//! État de la calculatrice (sans lecture de commandes, sans E/S).
//!
//! Rôle : contenir la pile de polynômes et le numéro de ligne courant,
//! et offrir des accès simples (empiler / dépiler / consulter).
//!
//! Contrats :
//! - Une commande qui échoue faute d’éléments ne modifie PAS la pile :
//!   tout ce qui a été dépilé est rempilé, dans l’ordre d’origine.
//! - Les polynômes de la pile ne sont jamais partagés (CLONE = copie profonde).

use tracing::trace;

use super::commandes::ErreurCommande;
use crate::noyau::Poly;

#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    pile: Vec<Poly>,
    ligne: usize,
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lignes ------------------------ */

    /// Numéro de la ligne en cours (à partir de 1).
    pub fn ligne(&self) -> usize {
        self.ligne
    }

    pub(crate) fn ligne_suivante(&mut self) -> usize {
        self.ligne += 1;
        self.ligne
    }

    /* ------------------------ Pile ------------------------ */

    pub fn len(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    pub fn empile(&mut self, p: Poly) {
        self.pile.push(p);
    }

    pub fn depile(&mut self) -> Result<Poly, ErreurCommande> {
        self.pile.pop().ok_or(ErreurCommande::PileVide)
    }

    /// Sommet, sans le retirer.
    pub fn sommet(&self) -> Result<&Poly, ErreurCommande> {
        self.pile.last().ok_or(ErreurCommande::PileVide)
    }

    /// Deux éléments du haut (sommet, en dessous), sans les retirer.
    pub fn sommets(&self) -> Result<(&Poly, &Poly), ErreurCommande> {
        match self.pile.as_slice() {
            [.., q, p] => Ok((p, q)),
            _ => Err(ErreurCommande::PileVide),
        }
    }

    /// Dépile n éléments (sommet en premier).
    /// S’il en manque : rempile ce qui a été pris et signale PileVide.
    pub fn depile_n(&mut self, n: u64) -> Result<Vec<Poly>, ErreurCommande> {
        let mut pris: Vec<Poly> = Vec::new();

        while (pris.len() as u64) < n {
            match self.pile.pop() {
                Some(p) => pris.push(p),
                None => {
                    trace!(rempiles = pris.len(), "pile insuffisante, restauration");
                    while let Some(p) = pris.pop() {
                        self.pile.push(p);
                    }
                    return Err(ErreurCommande::PileVide);
                }
            }
        }
        Ok(pris)
    }

    /// Deux éléments (sommet, dessous), retirés ensemble ou pas du tout.
    pub fn depile_deux(&mut self) -> Result<(Poly, Poly), ErreurCommande> {
        let mut pris = self.depile_n(2)?.into_iter();
        match (pris.next(), pris.next()) {
            (Some(p), Some(q)) => Ok((p, q)),
            _ => Err(ErreurCommande::PileVide),
        }
    }
}

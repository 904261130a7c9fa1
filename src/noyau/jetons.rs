// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;

/// Opérateurs binaires reconnus par l’évaluateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Ordre du pavé (colonne de droite, de bas en haut : + - × ÷).
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    /// Reconnaît un jeton opérateur.
    /// Accepte les symboles du pavé (× ÷) et leurs équivalents ASCII (* /).
    pub fn depuis_symbole(jeton: &str) -> Option<Self> {
        match jeton {
            "+" => Some(Operateur::Plus),
            "-" => Some(Operateur::Moins),
            "×" | "*" => Some(Operateur::Fois),
            "÷" | "/" => Some(Operateur::Divise),
            _ => None,
        }
    }

    /// Symbole affiché sur la touche (et inséré dans l’entrée).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }

    /// Applique l’opérateur. Division : sémantique IEEE-754 brute (x/0 => ±inf ou NaN).
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => a / b,
        }
    }
}

/// Découpe une expression sur l’espace littéral.
///
/// Pas de fusion des espaces multiples : "2  + 3" donne un jeton vide,
/// qui échouera ensuite à la lecture numérique.
pub fn tokenize(s: &str) -> Vec<&str> {
    s.split(' ').collect()
}

/// Lit un jeton numérique.
///
/// Grammaire de `f64::from_str`, resserrée sur les mots : seuls "Infinity" et
/// "NaN" (signés ou non, casse exacte) passent ; "inf", "nan", "INFINITY" sont refusés.
pub fn lire_nombre(jeton: &str, position: usize) -> Result<f64, ErreurCalcul> {
    let invalide = || ErreurCalcul::NombreInvalide {
        position,
        jeton: jeton.to_string(),
    };

    let sans_signe = jeton.strip_prefix(['+', '-']).unwrap_or(jeton);
    let mot_admis = matches!(sans_signe, "Infinity" | "NaN");
    // hors mots admis, la seule lettre tolérée est l’exposant
    if !mot_admis
        && sans_signe
            .chars()
            .any(|c| c.is_alphabetic() && c != 'e' && c != 'E')
    {
        return Err(invalide());
    }

    jeton.parse::<f64>().map_err(|_| invalide())
}

/// Format utilitaire (journal) : liste de jetons en texte, séparés par " | ".
pub fn format_tokens(jetons: &[&str]) -> String {
    jetons
        .iter()
        .map(|j| format!("{j:?}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

// src/noyau/format.rs

use num_traits::ToPrimitive;

/// Nombre de décimales par défaut pour un résultat non entier.
pub const DECIMALES_DEFAUT: usize = 2;

/* ------------------------ Affichage du résultat ------------------------ */

/// Texte affiché après "=".
///
/// - valeur entière : sans décimales (8 ÷ 2 => "4")
/// - sinon : `decimales` chiffres après le point (10 ÷ 3 => "3.33")
/// - non finie : "NaN", "Infinity", "-Infinity"
pub fn formater_resultat(valeur: f64, decimales: usize) -> String {
    if valeur.is_nan() {
        return "NaN".to_string();
    }
    if valeur.is_infinite() {
        return if valeur.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    if valeur % 1.0 == 0.0 {
        // -0.0 passe par ici et s’affiche "0"
        return match valeur.to_i64() {
            Some(n) => n.to_string(),
            // au-delà de i64 : tous les chiffres, sans partie décimale
            None => format!("{valeur:.0}"),
        };
    }

    arrondi_demi_haut(valeur, decimales)
}

/// Arrondi "au plus proche, moitié vers le haut" sur l’écriture décimale la plus
/// courte de `valeur` : 0.125 => "0.13", 1.005 => "1.01" (et non l’arrondi pair
/// du binaire exact que donnerait `{:.2}`).
fn arrondi_demi_haut(valeur: f64, decimales: usize) -> String {
    // Display f64 : plus courte écriture exacte, jamais d’exposant
    let texte = format!("{}", valeur.abs());
    let (entier, frac) = texte.split_once('.').unwrap_or((texte.as_str(), ""));

    let mut chiffres: Vec<u8> = entier.bytes().collect();
    let mut frac: Vec<u8> = frac.bytes().collect();
    let arrondir = frac.get(decimales).is_some_and(|&c| c >= b'5');
    frac.resize(decimales, b'0');
    chiffres.extend_from_slice(&frac);

    if arrondir {
        // retenue de droite à gauche ; 9.995 => 10.00
        let mut i = chiffres.len();
        loop {
            if i == 0 {
                chiffres.insert(0, b'1');
                break;
            }
            i -= 1;
            if chiffres[i] == b'9' {
                chiffres[i] = b'0';
            } else {
                chiffres[i] += 1;
                break;
            }
        }
    }

    let coupure = chiffres.len() - decimales;
    let mut out = String::with_capacity(chiffres.len() + 2);
    if valeur.is_sign_negative() {
        out.push('-');
    }
    out.extend(chiffres[..coupure].iter().map(|&c| char::from(c)));
    if decimales > 0 {
        out.push('.');
        out.extend(chiffres[coupure..].iter().map(|&c| char::from(c)));
    }
    out
}

// src/noyau/format.rs
//
// Affichage du résultat (ligne de commande, démarche).
// - entier flottant : une décimale ("9.0", "-3.0"), on voit que c'est un flottant
// - sinon : représentation la plus courte qui relit la même valeur
// - non finis : "inf", "-inf", "nan"

/// Formate un résultat pour l'affichage.
pub fn format_nombre(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        let s = if x > 0.0 { "inf" } else { "-inf" };
        return s.to_string();
    }
    if x.fract() == 0.0 && x.abs() < 1e16 {
        return format!("{x:.1}");
    }
    format!("{x}")
}

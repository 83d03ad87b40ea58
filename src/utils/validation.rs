//! Utilidades de validación y normalización
//!
//! Este módulo contiene funciones helper para validación de datos
//! y la normalización de campos de texto de las entidades.

use validator::ValidationError;

/// Normalizar un nombre: recortar espacios y poner en formato título
///
/// "  juan pérez " -> "Juan Pérez"
pub fn normalize_name(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizar un email: recortar espacios y pasar a minúsculas
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalizar una placa: recortar espacios y pasar a mayúsculas
pub fn normalize_placa(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar longitud mínima y máxima
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let mut error = ValidationError::new("length");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + serde::Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  juan pérez "), "Juan Pérez");
        assert_eq!(normalize_name("MARIA"), "Maria");
        assert_eq!(normalize_name("toyota  corolla"), "Toyota Corolla");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Juan@Ejemplo.COM "), "juan@ejemplo.com");
    }

    #[test]
    fn test_normalize_placa() {
        assert_eq!(normalize_placa(" abc-123 "), "ABC-123");
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("cliente").is_ok());
        assert!(validate_not_empty("   ").is_err());
        assert!(validate_not_empty("").is_err());
    }

    #[test]
    fn test_validate_length() {
        assert!(validate_length("Sedán", 2, 100).is_ok());
        assert!(validate_length("a", 2, 100).is_err());
        assert!(validate_length(&"x".repeat(101), 2, 100).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("test@").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(Decimal::new(100, 2)).is_ok());
        assert!(validate_positive(Decimal::ZERO).is_err());
        assert!(validate_positive(Decimal::new(-5, 0)).is_err());
    }
}

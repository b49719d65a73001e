//! Utilidades de validación
//!
//! El calculador de vencimientos asume entradas ya validadas, por lo que
//! todo parseo ocurre aquí o en los extractores. Los rangos y longitudes
//! se validan con derive en los DTOs; aquí solo vive lo que el derive no
//! cubre.

use chrono::NaiveDate;
use validator::ValidationError;

/// Validar y convertir string a fecha (YYYY-MM-DD)
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date_ok() {
        let date = validate_date("2025-08-18").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 8, 18).unwrap());
    }

    #[test]
    fn test_validate_date_malformed() {
        assert!(validate_date("18/08/2025").is_err());
        assert!(validate_date("no-es-fecha").is_err());
        assert!(validate_date("2025-02-30").is_err());
    }
}

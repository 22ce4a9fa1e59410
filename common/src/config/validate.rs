pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Checks that `value` lies in `min..=max`, naming the field in the error.
pub fn check_range<T>(field: &str, value: T, min: T, max: T) -> Result<(), String>
where
    T: PartialOrd + std::fmt::Display,
{
    if !(&min..=&max).contains(&&value) {
        return Err(format!("{} must be between {} and {}, got {}", field, min, max, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range_accepts_bounds() {
        assert!(check_range("cell_size", 40.0, 40.0, 200.0).is_ok());
        assert!(check_range("cell_size", 200.0, 40.0, 200.0).is_ok());
    }

    #[test]
    fn test_check_range_names_field() {
        let err = check_range("width", 10u32, 200, 4000).unwrap_err();
        assert_eq!(err, "width must be between 200 and 4000, got 10");
    }

    #[test]
    fn test_check_range_rejects_nan() {
        assert!(check_range("board.cell_size", f32::NAN, 40.0, 200.0).is_err());
    }
}

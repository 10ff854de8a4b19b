// src/matrix/json.rs
//
// Ingestion of untyped nested arrays. Typed constructors get most of the
// structural checks from the compiler; here every one of them runs at runtime.

use crate::error::AlumathError;
use crate::matrix::Matrix;
use crate::numeric::Numeric;
use log::debug;
use serde_json::Value;

impl<T: Numeric> Matrix<T> {
    /// Parses a JSON document such as `[[1, 2], [3, 4]]` into a matrix.
    ///
    /// Malformed JSON and every structural problem are reported as
    /// [`AlumathError::InvalidMatrix`].
    pub fn from_json_str(input: &str) -> Result<Self, AlumathError> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| AlumathError::invalid_matrix(format!("Malformed JSON: {}", e)))?;
        Matrix::from_json_value(&value)
    }

    /// Builds a matrix from an untyped JSON value.
    ///
    /// Rejects, in this order: a top level that is not an array, an empty
    /// array, a row that is not an array, rows of differing length (or empty
    /// rows), and any element that is not a number representable as `T`.
    /// Booleans, strings, nulls and nested arrays are not numbers.
    pub fn from_json_value(value: &Value) -> Result<Self, AlumathError> {
        let result = parse_value(value);
        if let Err(e) = &result {
            debug!("Matrix::from_json_value rejected input: {}", e);
        }
        result
    }

    /// Returns the nested-array JSON form of the matrix.
    ///
    /// JSON has no NaN or infinity, so non-finite float elements are written
    /// as `null`. Such output does not parse back with
    /// [`Matrix::from_json_value`].
    pub fn to_json_value(&self) -> Value {
        Value::Array(
            self.iter_rows()
                .map(|row| Value::Array(row.iter().map(|v| v.to_json_value()).collect()))
                .collect(),
        )
    }
}

fn parse_value<T: Numeric>(value: &Value) -> Result<Matrix<T>, AlumathError> {
    let rows = value
        .as_array()
        .ok_or_else(|| AlumathError::invalid_matrix("Matrix data must be a list"))?;
    if rows.is_empty() {
        return Err(AlumathError::invalid_matrix("Matrix cannot be empty"));
    }

    let rows: Vec<&Vec<Value>> = rows
        .iter()
        .map(|row| row.as_array())
        .collect::<Option<_>>()
        .ok_or_else(|| AlumathError::invalid_matrix("All rows must be lists"))?;

    let row_length = rows[0].len();
    if row_length == 0 {
        return Err(AlumathError::invalid_matrix("Matrix rows cannot be empty"));
    }
    if rows.iter().any(|row| row.len() != row_length) {
        return Err(AlumathError::invalid_matrix(
            "All rows must have the same length",
        ));
    }

    let mut data = Vec::with_capacity(rows.len() * row_length);
    for (i, row) in rows.iter().enumerate() {
        for (j, element) in row.iter().enumerate() {
            let number = match element {
                Value::Number(number) => number,
                _ => {
                    return Err(AlumathError::invalid_matrix(format!(
                        "Element at ({}, {}) must be a number",
                        i, j
                    )))
                }
            };
            let value = T::from_json_number(number).ok_or_else(|| {
                AlumathError::invalid_matrix(format!(
                    "Element at ({}, {}) is not representable as {}: {}",
                    i,
                    j,
                    T::TYPE_NAME,
                    number
                ))
            })?;
            data.push(value);
        }
    }
    Matrix::from_vec(data, (rows.len(), row_length))
}

#[cfg(test)]
mod tests {
    use crate::error::AlumathError;
    use crate::Matrix;
    use serde_json::json;

    fn reason<T: crate::numeric::Numeric>(value: serde_json::Value) -> String {
        match Matrix::<T>::from_json_value(&value).unwrap_err() {
            AlumathError::InvalidMatrix { reason } => reason,
            e => panic!("Expected InvalidMatrix, got {:?}", e),
        }
    }

    #[test]
    fn test_from_json_str() {
        let m = Matrix::<i32>::from_json_str("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(m.to_vec(), vec![vec![1, 2], vec![3, 4]]);

        let f = Matrix::<f64>::from_json_str("[[1, 2.5]]").unwrap();
        assert_eq!(f.to_vec(), vec![vec![1.0, 2.5]]);
    }

    #[test]
    fn test_malformed_json() {
        let err = Matrix::<i32>::from_json_str("[[1, 2]").unwrap_err();
        assert!(matches!(err, AlumathError::InvalidMatrix { .. }));
    }

    #[test]
    fn test_structural_rejections() {
        assert_eq!(reason::<i32>(json!({"a": 1})), "Matrix data must be a list");
        assert_eq!(reason::<i32>(json!(5)), "Matrix data must be a list");
        assert_eq!(reason::<i32>(json!([])), "Matrix cannot be empty");
        assert_eq!(reason::<i32>(json!([[1], 2])), "All rows must be lists");
        assert_eq!(reason::<i32>(json!([[1, 2], [3]])), "All rows must have the same length");
        assert_eq!(reason::<i32>(json!([[]])), "Matrix rows cannot be empty");
    }

    #[test]
    fn test_non_numeric_elements() {
        assert_eq!(reason::<f64>(json!([[1, "2"]])), "Element at (0, 1) must be a number");
        assert_eq!(reason::<f64>(json!([[1], [true]])), "Element at (1, 0) must be a number");
        assert_eq!(reason::<f64>(json!([[null]])), "Element at (0, 0) must be a number");
        assert_eq!(reason::<f64>(json!([[[1]]])), "Element at (0, 0) must be a number");
    }

    #[test]
    fn test_unrepresentable_number() {
        assert_eq!(
            reason::<i32>(json!([[1, 1.5]])),
            "Element at (0, 1) is not representable as i32: 1.5"
        );
    }

    #[test]
    fn test_to_json_value() {
        let m = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.to_json_value(), json!([[1, 2], [3, 4]]));
        let back = Matrix::<i32>::from_json_value(&m.to_json_value()).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_float_out_of_range() {
        let err = Matrix::<f32>::from_json_str("[[1e300]]").unwrap_err();
        match err {
            AlumathError::InvalidMatrix { reason } => assert!(
                reason.starts_with("Element at (0, 0) is not representable as f32"),
                "unexpected reason: {}",
                reason
            ),
            e => panic!("Expected InvalidMatrix, got {:?}", e),
        }
        let wide = Matrix::<f64>::from_json_str("[[1e300]]").unwrap();
        assert_eq!(wide.get(0, 0).unwrap(), 1e300);
    }

    #[test]
    fn test_non_finite_to_json() {
        let m = Matrix::new(vec![vec![1.0, f64::NAN], vec![f64::INFINITY, 2.0]]).unwrap();
        let value = m.to_json_value();
        assert_eq!(value, json!([[1.0, null], [null, 2.0]]));
        assert!(Matrix::<f64>::from_json_value(&value).is_err());
    }
}

use sea_orm::DbErr;

/// Postgres reports unique violations as SQLSTATE 23505.
pub fn is_unique_violation(err: &DbErr) -> bool {
    let err_str = err.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn detects_duplicate_key_message() {
        let err = DbErr::Query(RuntimeErr::Internal(
            "duplicate key value violates unique constraint \"roles_name_key\"".to_string(),
        ));
        assert!(is_unique_violation(&err));
    }

    #[test]
    fn ignores_other_errors() {
        let err = DbErr::Conn(RuntimeErr::Internal("connection refused".to_string()));
        assert!(!is_unique_violation(&err));
    }
}

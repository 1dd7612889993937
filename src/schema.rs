//! Diesel schema for the externally managed catalog.

diesel::table! {
    achievement (id) {
        id -> Int4,
        name -> Text,
    }
}

diesel::define_sql_function! {
    /// `pg_trgm` trigram similarity between two strings.
    fn similarity(
        a: diesel::sql_types::Text,
        b: diesel::sql_types::Text,
    ) -> diesel::sql_types::Float;
}

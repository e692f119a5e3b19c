// Kept in sync with `bootstrap::SCHEMA_SQL`.

diesel::table! {
    generation_history (id) {
        id -> Int4,
        user_id -> Nullable<Int4>,
        image_url -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    users (id) {
        id -> Int4,
        username -> Varchar,
        email -> Varchar,
        created_at -> Timestamptz,
    }
}

// generation_history.user_id carries no foreign key, so no joinable! here.
diesel::allow_tables_to_appear_in_same_query!(generation_history, users);

diesel::table! {
	/// Users of the PostgreSQL demo.
	users (id) {
		id -> Int4,
		name -> Varchar,
		/// Unique among all users.
		email -> Varchar,
		/// Insertion time, filled by the database.
		///
		/// Nullable because the table may be provisioned outside of our
		/// migrations.
		created_at -> Nullable<Timestamp>,
	}
}

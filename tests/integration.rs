//! End-to-end integration tests.
//!
//! Database-backed cases are `#[ignore]`d so the default suite runs without
//! a live PostgreSQL; run them with `cargo test -- --ignored` against a
//! local instance (set `BISTROHUB_TEST_DATABASE_URL` to point elsewhere).

mod integration {
    pub mod helpers;

    mod audit_test;
    mod checkout_test;
}

mod crud_tests;
mod serialize_tests;

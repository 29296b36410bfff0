mod issuer_tests;
mod service_tests;

mod normalize_tests;
mod parse_tests;
mod property_tests;
mod utils;

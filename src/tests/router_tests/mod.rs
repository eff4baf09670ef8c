mod home_tests;
mod results_tests;

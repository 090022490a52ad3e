pub use fixture::LiquidityPoolTest;

mod rejecting_recipient_tests;

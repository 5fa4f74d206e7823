//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the widget service
//! against mock host adapters.  All tests run on the host with no
//! dashboard required.

mod config_flow_tests;
mod mock_host;

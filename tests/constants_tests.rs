// Host-side checks on the page contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn page_ids_match_the_host_page() {
    assert_eq!(CANVAS_ID, "app-canvas");
    assert_eq!(INFO_ID, "info");
    assert!(DEMO_ATTR.starts_with("data-"));
    assert!(SEED_ATTR.starts_with("data-"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_is_sane() {
    assert!(CLICK_SLOP_PX > 0.0);
    assert!(INITIAL_INSTANCE_CAPACITY > 0);
    assert!(DEPTH_FORMAT.has_depth_aspect());
}

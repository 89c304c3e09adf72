fn main() {
    let std_enabled = std::env::var("CARGO_FEATURE_STD").is_ok();
    let libm_enabled = std::env::var("CARGO_FEATURE_LIBM").is_ok();

    if std_enabled && libm_enabled {
        panic!(
            "Features \"std\" and \"libm\" select the floating point backend and are mutually exclusive.
The crate defaults to \"std\"; to use libm build with `--no-default-features --features libm`."
        );
    }
}

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds only exist for the unit tests.
    let target = env::var("TARGET").unwrap_or_default();
    if !target.contains("avr") {
        return;
    }

    println!("cargo:rustc-link-arg=-mmcu=attiny13a");

    if env::var("CARGO_FEATURE_DEBUG").is_ok() {
        println!("cargo:warning=debug console on PB5 needs the RSTDISBL fuse");
    }

    println!("cargo:warning=Building for ATtiny13A at 1.2MHz");
}

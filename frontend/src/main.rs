#[cfg(target_arch = "wasm32")]
fn main() {
    absensi_frontend::boot();
}

// The binary only exists for the WASM bundle; host builds compile the
// library for tests.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}

//! Browser entry point: mounts the CSR app onto `<body>`.

#[cfg(feature = "csr")]
fn main() {
    use leptos::prelude::*;
    use site::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[cfg(not(feature = "csr"))]
fn main() {
    // The UI only runs in the browser; host builds exist for `cargo test`.
}

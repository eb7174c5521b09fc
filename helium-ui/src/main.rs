//! Helium Student Planner
//!
//! Browser front end built with Leptos (WASM).
//!
//! # Features
//!
//! - Public pages: home, about, press, contact, terms, privacy
//! - Account pages: login, logout, register, verify, forgot password, support
//! - Planner scenes behind the auth guard: calendar, classes, materials,
//!   grades, settings
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Page logic lives in the `helium` crate's flows and store; the
//! components here render that state and talk to the planner API over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}

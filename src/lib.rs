mod app;
mod components;
pub mod config;
pub mod models;
mod state;
pub mod storage;
pub mod store;
pub mod util;

pub use app::App;
pub use config::EnvConfig;
pub use models::Note;
pub use storage::{LocalStorage, MemoryStorage, NoteRepository, StorageBackend, StorageError};
pub use store::{AlwaysConfirm, ConfirmDelete, NoteStore, Status};

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

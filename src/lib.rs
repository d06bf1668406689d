mod hitbox;
mod span;

pub use hitbox::Hitbox;
pub use span::Span;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    {
        console_error_panic_hook::set_once();
        web_sys::console::debug_1(&"simple_2d_hitbox loaded".into());
    }
    Ok(())
}

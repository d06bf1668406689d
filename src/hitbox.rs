use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

use crate::span::Span;

/// Axis-aligned rectangle on an integer grid. `(x, y)` is the top-left
/// corner; width and height are stored as given, with no sign checks.
#[wasm_bindgen]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hitbox {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

#[wasm_bindgen]
impl Hitbox {
    /// Position first, then dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Hitbox {
        let mut hitbox = Hitbox::at(x, y);
        hitbox.resize(width, height);
        hitbox
    }

    /// Hitbox at the origin with zero size.
    pub fn empty() -> Hitbox {
        Hitbox::default()
    }

    /// Hitbox at `(x, y)` with zero size.
    #[wasm_bindgen(js_name = "atPosition")]
    pub fn at(x: i32, y: i32) -> Hitbox {
        let mut hitbox = Hitbox::default();
        hitbox.move_to(x, y);
        hitbox
    }

    #[wasm_bindgen(js_name = "move")]
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.set_x(x);
        self.set_y(y);
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.set_width(width);
        self.set_height(height);
    }

    #[wasm_bindgen(js_name = "updateMoveFirst")]
    pub fn update_move_first(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.move_to(x, y);
        self.resize(width, height);
    }

    #[wasm_bindgen(js_name = "updateResizeFirst")]
    pub fn update_resize_first(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.resize(width, height);
        self.move_to(x, y);
    }

    /// True when an edge of `self` falls inside `other`'s span on both axes.
    ///
    /// Only the receiver's edges are tested, so the result is not symmetric:
    /// a large box does not collide with a small box sitting strictly inside
    /// it, while the small box does collide with the large one.
    #[wasm_bindgen(js_name = "collidesWithOther")]
    pub fn collides_with_other(&self, other: &Hitbox) -> bool {
        let (left, right) = (self.x, self.x.wrapping_add(self.width));
        let (top, bottom) = (self.y, self.y.wrapping_add(self.height));

        let across = other.horizontal_span();
        let down = other.vertical_span();

        (across.contains(left) || across.contains(right))
            && (down.contains(top) || down.contains(bottom))
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> i32 { self.x }
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> i32 { self.y }
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> i32 { self.width }
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> i32 { self.height }

    #[wasm_bindgen(setter)]
    pub fn set_x(&mut self, x: i32) { self.x = x; }
    #[wasm_bindgen(setter)]
    pub fn set_y(&mut self, y: i32) { self.y = y; }
    #[wasm_bindgen(setter)]
    pub fn set_width(&mut self, width: i32) { self.width = width; }
    #[wasm_bindgen(setter)]
    pub fn set_height(&mut self, height: i32) { self.height = height; }

    pub fn equals(&self, other: &Hitbox) -> bool {
        self == other
    }

    /// Wrapping sum of all four fields. Distinct boxes share a hash often,
    /// e.g. `(1, 0, 0, 0)` and `(0, 1, 0, 0)`.
    #[wasm_bindgen(js_name = "hashCode")]
    pub fn hash_code(&self) -> i32 {
        self.x
            .wrapping_add(self.y)
            .wrapping_add(self.width)
            .wrapping_add(self.height)
    }

    #[wasm_bindgen(js_name = "toString")]
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub fn log(&self) {
        web_sys::console::log_1(&self.describe().into());
    }

    #[wasm_bindgen(js_name = "toJs")]
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Hitbox serialization failed: {}", e)))
    }

    #[wasm_bindgen(js_name = "fromJs")]
    pub fn from_js(value: JsValue) -> Result<Hitbox, JsValue> {
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Hitbox deserialization failed: {}", e)))
    }
}

impl Hitbox {
    pub fn horizontal_span(&self) -> Span {
        Span::new(self.x, self.width)
    }

    pub fn vertical_span(&self) -> Span {
        Span::new(self.y, self.height)
    }
}

impl Hash for Hitbox {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for Hitbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x = {}, y = {}, width = {}, height = {}",
            self.x, self.y, self.width, self.height
        )
    }
}

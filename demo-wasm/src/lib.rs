use drifty::{
    Aabb, NoOpStepObserver, Obstacle, RenderLayer, Vec2, WordLayout, World, WorldConfig,
};
use wasm_bindgen::prelude::*;

fn to_js(err: drifty::SimError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ---- Hero Word Demo ----

#[wasm_bindgen]
pub struct GlyphDemo {
    world: World<f32>,
    render: RenderLayer<f32>,
    held: Option<usize>,
}

#[wasm_bindgen]
impl GlyphDemo {
    /// Lays `word` out centred on (cx, cy), one glyph per character.
    #[wasm_bindgen(constructor)]
    pub fn new(word: &str, cx: f32, cy: f32, width: f32, height: f32) -> Result<GlyphDemo, JsValue> {
        let layout = WordLayout::hero(Vec2::new(cx, cy));
        let config = WorldConfig::new().with_bounds(Aabb::new(Vec2::zero(), Vec2::new(width, height)));
        let world = World::from_word(word.chars().map(String::from), &layout, config).map_err(to_js)?;
        let mut render = RenderLayer::new();
        render.sync(&world);
        Ok(GlyphDemo { world, render, held: None })
    }

    pub fn add_obstacle(&mut self, name: &str, x0: f32, y0: f32, x1: f32, y1: f32) -> usize {
        self.world.add_obstacle(Obstacle::new(name, Aabb::new(Vec2::new(x0, y0), Vec2::new(x1, y1))))
    }

    /// `dt` is the frame time in seconds.
    pub fn update(&mut self, dt: f32) {
        self.world.advance(dt, &mut NoOpStepObserver);
        self.render.sync(&self.world);
        self.render.advance(dt);
    }

    /// Grab the top-most glyph under the pointer. Returns its index or -1.
    pub fn pointer_down(&mut self, x: f32, y: f32, time: f32) -> i32 {
        let point = Vec2::new(x, y);
        let hit = self.world.glyphs().iter().rev().find(|g| g.bounds().contains(point)).map(|g| g.index());
        match hit {
            Some(index) if self.world.begin_drag(index, point, time).is_ok() => {
                self.held = Some(index);
                index as i32
            }
            _ => -1,
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, time: f32) {
        if let Some(index) = self.held {
            if let Err(err) = self.world.drag_to(index, Vec2::new(x, y), time) {
                log::warn!("drag move ignored: {}", err);
            }
        }
    }

    pub fn pointer_up(&mut self, x: f32, y: f32, time: f32) {
        if let Some(index) = self.held.take() {
            if let Err(err) = self.world.end_drag(index, Vec2::new(x, y), time) {
                log::warn!("release ignored: {}", err);
            }
        }
    }

    /// CSS transform strings, one per glyph.
    pub fn transforms(&self) -> Vec<String> {
        self.render.transforms().map(|t| t.to_string()).collect()
    }

    /// Image path per glyph, same order as `transforms`.
    pub fn asset_paths(&self) -> Vec<String> {
        self.world.glyphs().iter().map(|g| g.asset_path()).collect()
    }

    /// Returns flat [x0, y0, r0, x1, y1, r1, ...]
    pub fn positions(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.render.len() * 3);
        for t in self.render.transforms() {
            out.push(t.x);
            out.push(t.y);
            out.push(t.rotation);
        }
        out
    }

    pub fn glyph_count(&self) -> usize {
        self.world.glyph_count()
    }

    pub fn is_settled(&self) -> bool {
        self.world.is_settled()
    }
}

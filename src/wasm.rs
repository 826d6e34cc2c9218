use wasm_bindgen::prelude::*;

use crate::config::SessionConfig;
use crate::game::GameSession;

/// Browser handle to a single game session.
///
/// Intents coming from the page never fail; only value conversion across the
/// JS boundary can produce a `JsError`.
#[wasm_bindgen]
pub struct TicTacToe {
    session: GameSession,
}

#[wasm_bindgen]
impl TicTacToe {
    /// `config` may be `undefined`, `null`, or an object like `{ order: "descending" }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<TicTacToe, JsError> {
        let config = if config.is_undefined() || config.is_null() {
            SessionConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsError::new(&format!("invalid session config: {e}")))?
        };

        Ok(Self {
            session: GameSession::with_config(&config),
        })
    }

    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, cell: usize) {
        self.session.apply_move(cell);
    }

    #[wasm_bindgen(js_name = jumpTo)]
    pub fn jump_to(&mut self, step: usize) {
        self.session.jump_to(step);
    }

    #[wasm_bindgen(js_name = toggleOrder)]
    pub fn toggle_order(&mut self) {
        self.session.toggle_order();
    }

    #[wasm_bindgen(js_name = currentView)]
    pub fn current_view(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.session.current_view())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = historyLength)]
    pub fn history_length(&self) -> usize {
        self.session.history().len()
    }

    pub fn cursor(&self) -> usize {
        self.session.cursor()
    }
}

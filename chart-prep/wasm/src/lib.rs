use schema::ChartSpec;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn prepare(input_json: String) -> String {
    let spec: ChartSpec = match serde_json::from_str(&input_json) {
        Ok(spec) => spec,
        Err(e) => {
            return e.to_string();
        }
    };
    match chart_prep::prepare(spec) {
        Ok(output) => serde_json::to_string(&output).unwrap_or_else(|e| e.to_string()),
        Err(e) => e.to_string(),
    }
}

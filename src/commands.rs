use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// -- Arg structs for serialization --

#[derive(Serialize)]
struct RosterArgs {
    roster: String,
}

#[derive(Serialize)]
struct OpenMeetingArgs {
    url: String,
}

#[derive(Serialize)]
struct GetPreferenceArgs {
    key: String,
}

#[derive(Serialize)]
struct SetPreferenceArgs {
    key: String,
    value: String,
}

// -- Attendance report matching backend struct --

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AttendanceReport {
    pub roster: Vec<String>,
    pub present: Vec<String>,
    pub absent: Vec<String>,
    pub detected: Vec<String>,
    pub rate: u32,
}

fn error_text(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

// -- Typed invoke helpers --

pub async fn load_roster() -> Result<Option<String>, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({}))
        .map_err(|e| e.to_string())?;

    let result = invoke("load_roster", args).await.map_err(error_text)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn save_roster(roster: &str) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(&RosterArgs {
        roster: roster.to_string(),
    })
    .map_err(|e| e.to_string())?;

    invoke("save_roster", args)
        .await
        .map(|_| ())
        .map_err(error_text)
}

pub async fn run_attendance_check(roster: &str) -> Result<AttendanceReport, String> {
    let args = serde_wasm_bindgen::to_value(&RosterArgs {
        roster: roster.to_string(),
    })
    .map_err(|e| e.to_string())?;

    let result = invoke("run_attendance_check", args)
        .await
        .map_err(error_text)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn open_meeting(url: &str) -> Result<String, String> {
    let args = serde_wasm_bindgen::to_value(&OpenMeetingArgs {
        url: url.to_string(),
    })
    .map_err(|e| e.to_string())?;

    let result = invoke("open_meeting", args).await.map_err(error_text)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn get_preference(key: &str) -> Result<Option<String>, String> {
    let args = serde_wasm_bindgen::to_value(&GetPreferenceArgs {
        key: key.to_string(),
    })
    .map_err(|e| e.to_string())?;

    let result = invoke("get_preference", args).await.map_err(error_text)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn set_preference(key: &str, value: &str) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(&SetPreferenceArgs {
        key: key.to_string(),
        value: value.to_string(),
    })
    .map_err(|e| e.to_string())?;

    invoke("set_preference", args)
        .await
        .map(|_| ())
        .map_err(error_text)
}

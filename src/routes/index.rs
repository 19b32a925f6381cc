use axum::Json;
use serde_json::{json, Value};

pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Adverse Event Report Assistant API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "process_report": "/process-report",
            "reports": "/reports",
            "translate": "/translate",
            "analytics": "/analytics",
            "health": "/health",
        }
    }))
}

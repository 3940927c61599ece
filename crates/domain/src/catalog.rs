//! Options offered by the forecasting API
//!
//! These mirror what the server accepts today. They are used to present
//! choices, never to reject input: the server remains the judge.

/// Cities with trained models
pub const KNOWN_CITIES: [&str; 4] = ["ahmedabad", "mumbai", "delhi", "bengaluru"];

/// Base models plus the ensemble that averages them
pub const KNOWN_MODELS: [&str; 6] = [
    "LightGBM",
    "CatBoost",
    "ExtraTrees",
    "XGBoost",
    "HistGradientBoosting",
    "Ensemble",
];

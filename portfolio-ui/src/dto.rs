use serde::{Deserialize, Serialize};

/// Options object passed as the fourth argument of `emailjs.send`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailJsOptions {
    pub public_key: String,
}

/// Shape of the value an `emailjs.send` promise rejects with.
#[derive(Clone, Debug, Deserialize)]
pub struct EmailJsFailure {
    pub status: u16,
    pub text: String,
}

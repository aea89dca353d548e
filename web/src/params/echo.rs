use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct EchoParams {
    /// The message echoed back on every event.
    #[param(example = "hello")]
    pub(crate) message: String,
}

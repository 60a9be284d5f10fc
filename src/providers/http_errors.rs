use anyhow::anyhow;

pub(crate) fn model_api_request_error(
    err: reqwest::Error,
    api_url: &str,
    timeout_secs: Option<u64>,
) -> anyhow::Error {
    match (err.is_timeout(), timeout_secs) {
        (true, Some(secs)) => anyhow!(
            "Chat completion to '{api_url}' gave no answer within MODEL_TIMEOUT_SECS={secs}"
        ),
        (true, None) => anyhow!("Chat completion to '{api_url}' timed out: {err}"),
        (false, _) => anyhow!(
            "Could not reach chat completion endpoint '{api_url}' (check MODEL_BASE_URL): {err}"
        ),
    }
}

// JobPsych assistant core: prompt selection, response shaping, mock fallback
// and the model gateway. All provider calls go through llm_client.

pub mod errors;
pub mod fallback;
pub mod gateway;
pub mod handlers;
pub mod normalizer;
pub mod prompts;

// Shared prompt fragments.
// Each service that calls the LLM defines its own prompts.rs alongside it;
// this file holds what they have in common.

/// System prompt for every JSON-mode call.
pub const JSON_ONLY_SYSTEM: &str = "Você é um especialista em análise de dados qualitativos \
    e psicologia vocacional. Sempre responda com JSON válido. \
    Não inclua nenhum texto fora do objeto JSON. \
    Não use blocos de código markdown.";

/// Marker replaced with the serialized reviews in every template.
pub const REVIEWS_PLACEHOLDER: &str = "{reviews_json}";

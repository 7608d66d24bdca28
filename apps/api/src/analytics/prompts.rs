// Prompt constants for aggregate analytics.

/// Replace `{review_count}` and `{reviews_json}` before sending.
pub const ANALYTICS_PROMPT_TEMPLATE: &str = r#"Analise as seguintes avaliações feitas entre jogadores e identifique padrões gerais,
características comuns e insights baseados no framework IKIGAI.

AVALIAÇÕES ({review_count} no total):
{reviews_json}

Com base nessas avaliações, faça uma análise agregada e retorne SOMENTE um JSON válido com a seguinte estrutura:

{
  "totalReviews": <número de avaliações analisadas>,
  "ikigaiInsights": {
    "passion": [<3-5 paixões ou interesses comuns>],
    "mission": [<3-5 missões ou propósitos comuns>],
    "vocation": [<3-5 talentos ou vocações comuns>],
    "profession": [<3-5 áreas profissionais que combinam com os perfis>]
  },
  "commonCharacteristics": [<5-7 características de personalidade mais comuns>],
  "interestAreas": [<4-6 áreas de interesse comuns>],
  "suggestedCareers": [<5-8 carreiras que combinam com o perfil geral do grupo>],
  "summary": "<resumo em 2-3 parágrafos sobre o perfil geral do grupo>"
}

IMPORTANTE:
- Todas as listas devem conter strings curtas e objetivas, da mais para a menos frequente
- O summary deve ser inspirador e construtivo
- Identifique padrões reais nas avaliações fornecidas"#;

// Prompt constants for vocational report generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Ikigai report prompt. Replace `{player_name}` and `{reviews_json}` before sending.
pub const IKIGAI_REPORT_PROMPT_TEMPLATE: &str = r#"ORIENTAÇÃO VOCACIONAL BASEADA EM IKIGAI

Você é um especialista em psicologia vocacional, coaching e mercado de trabalho.
Gere um relatório empático, construtivo e inspirador sobre {player_name}, com base
em avaliações qualitativas escritas por pessoas próximas.

Avaliações:
{reviews_json}

Instruções de análise:

1. Mapeie as avaliações para os quatro pilares do IKIGAI:
   - Paixão: o que a pessoa ama fazer e o que a empolga.
   - Missão: que impacto ou problema do mundo ela gostaria de resolver.
   - Vocação: os talentos naturais que os outros reconhecem.
   - Profissão: áreas em que essas habilidades gerariam valor e reconhecimento.
2. Identifique traços de personalidade, valores e motivações recorrentes.
3. Sugira de 3 a 5 caminhos profissionais, explicando a relação de cada um com os pilares.
4. Traga recomendações práticas: cursos, experiências ou atividades para explorar.
5. Finalize com uma mensagem inspiradora.

Retorne um objeto JSON com este esquema EXATO (sem campos extras):
{
  "analysis": "<resumo do perfil e mapa Ikigai, em texto corrido com quebras de linha>",
  "vocationalRecommendation": "<caminhos profissionais, próximos passos e mensagem final>"
}

Use texto simples dentro das strings, sem markdown."#;

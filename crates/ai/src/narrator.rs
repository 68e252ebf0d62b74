//! Deal narration: turns engine output into a prompt and streams the
//! model's summary back.

use std::sync::Arc;

use rust_decimal::Decimal;

use cookincapital_core::deals::{DealCalculations, DealInput};

use crate::client::{LlmClientTrait, TextStream};
use crate::error::AiError;
use crate::types::ChatMessage;

/// System prompt for deal narration. The model explains numbers; it is
/// never asked to produce or correct them.
pub const NARRATION_SYSTEM_PROMPT: &str = "You are a real-estate investment assistant. \
You are given the computed numbers for a fix-and-flip deal analysis. \
Summarize the deal in plain language for an investor: the expected profit, \
the return on investment, and the recommendation. Do not recalculate, \
adjust, or second-guess any figure; every number you mention must appear \
verbatim in the analysis you were given.";

/// Builds the narration prompt from engine output. Pure formatting: every
/// figure comes from `calc`, none is computed here.
pub fn build_narration_prompt(input: &DealInput, calc: &DealCalculations) -> String {
    let mut prompt = String::new();
    prompt.push_str(&format!(
        "Deal analysis for {}:\n",
        input.property.full_address()
    ));
    prompt.push_str(&format!(
        "- Purchase price: ${}\n",
        round(input.pricing.purchase_price)
    ));
    prompt.push_str(&format!(
        "- After-repair value: ${}\n",
        round(input.pricing.arv)
    ));
    prompt.push_str(&format!(
        "- Total rehab cost: ${}\n",
        round(calc.total_rehab_cost)
    ));
    prompt.push_str(&format!(
        "- Total investment: ${}\n",
        round(calc.total_investment)
    ));
    prompt.push_str(&format!("- Total profit: ${}\n", round(calc.total_profit)));
    prompt.push_str(&format!("- ROI: {}%\n", round(calc.roi)));
    prompt.push_str(&format!(
        "- Maximum allowable offer (70% rule): ${}\n",
        round(calc.max_allowable_offer)
    ));
    prompt.push_str(&format!("- Cash needed: ${}\n", round(calc.cash_needed)));
    prompt.push_str(&format!(
        "- Recommendation: {} (grade {})\n",
        calc.signal, calc.grade
    ));
    prompt.push_str("\nNarrate this analysis for the investor.");
    prompt
}

fn round(value: Decimal) -> Decimal {
    value.round_dp(2).normalize()
}

/// Streams a narrative summary of a computed analysis.
pub struct DealNarrator {
    client: Arc<dyn LlmClientTrait>,
}

impl DealNarrator {
    pub fn new(client: Arc<dyn LlmClientTrait>) -> Self {
        Self { client }
    }

    /// Sends the narration prompt and returns the model's text stream.
    /// Callers treat a failure here as non-fatal; the numbers were already
    /// computed and displayed before narration starts.
    pub async fn narrate(
        &self,
        input: &DealInput,
        calc: &DealCalculations,
    ) -> Result<TextStream, AiError> {
        let messages = vec![
            ChatMessage::system(NARRATION_SYSTEM_PROMPT),
            ChatMessage::user(build_narration_prompt(input, calc)),
        ];
        self.client.stream_chat(messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cookincapital_core::deals::evaluate;
    use futures::StreamExt;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    fn analyzed_flip() -> (DealInput, DealCalculations) {
        let mut input = DealInput::default();
        input.property.street = "412 Maple St".to_string();
        input.property.city = "Tulsa".to_string();
        input.property.state = "OK".to_string();
        input.property.zip = "74104".to_string();
        input.financing.interest_rate = dec!(0);
        input.financing.loan_points = dec!(0);
        input.selling.agent_commission_percent = dec!(0);
        input.pricing.purchase_price = dec!(185000);
        input.pricing.arv = dec!(275000);
        input.rehab.miscellaneous = dec!(35000);
        let calc = evaluate(&input);
        (input, calc)
    }

    #[test]
    fn prompt_carries_engine_numbers_verbatim() {
        let (input, calc) = analyzed_flip();
        let prompt = build_narration_prompt(&input, &calc);

        assert!(prompt.contains("412 Maple St, Tulsa, OK 74104"));
        assert!(prompt.contains("Total profit: $55000"));
        assert!(prompt.contains("ROI: 25%"));
        assert!(prompt.contains("STRONG BUY"));
        assert!(prompt.contains("grade A"));
    }

    struct EchoClient {
        seen: Mutex<Vec<ChatMessage>>,
    }

    #[async_trait]
    impl LlmClientTrait for EchoClient {
        async fn stream_chat(&self, messages: Vec<ChatMessage>) -> Result<TextStream, AiError> {
            self.seen.lock().unwrap().extend(messages);
            let parts = vec![Ok("A solid ".to_string()), Ok("flip.".to_string())];
            Ok(Box::pin(futures::stream::iter(parts)))
        }
    }

    #[tokio::test]
    async fn narrate_streams_the_model_output() {
        let client = Arc::new(EchoClient {
            seen: Mutex::new(Vec::new()),
        });
        let narrator = DealNarrator::new(client.clone());
        let (input, calc) = analyzed_flip();

        let mut stream = narrator.narrate(&input, &calc).await.unwrap();
        let mut text = String::new();
        while let Some(delta) = stream.next().await {
            text.push_str(&delta.unwrap());
        }
        assert_eq!(text, "A solid flip.");

        let seen = client.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].content, NARRATION_SYSTEM_PROMPT);
        assert!(seen[1].content.contains("ROI: 25%"));
    }
}

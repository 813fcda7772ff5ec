//! Wire format tests for the public types

#[cfg(test)]
mod tests {
    use openai_completions::{
        Completion, CompletionRequest, CompletionResponse, FineTunedModel, LogprobResult,
        ModelId, ModelVariant, OpenAIError,
    };
    use serde_json::{Value, json};

    fn sorted_keys(value: &Value) -> Vec<&str> {
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn test_say_hi_has_exactly_three_keys() {
        let request = CompletionRequest::new(Completion::TextDavinci003)
            .with_prompt("Say hi")
            .with_max_tokens(5);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(sorted_keys(&value), vec!["max_tokens", "model", "prompt"]);
    }

    #[test]
    fn test_each_set_field_appears_exactly_once() {
        let cases: Vec<(CompletionRequest<Completion>, &str)> = vec![
            (CompletionRequest::new(Completion::Ada).with_suffix("s"), "suffix"),
            (CompletionRequest::new(Completion::Ada).with_n(2), "n"),
            (CompletionRequest::new(Completion::Ada).with_stream(true), "stream"),
            (CompletionRequest::new(Completion::Ada).with_echo(true), "echo"),
            (CompletionRequest::new(Completion::Ada).with_stop("\n"), "stop"),
            (CompletionRequest::new(Completion::Ada).with_best_of(2), "best_of"),
            (CompletionRequest::new(Completion::Ada).with_user("u"), "user"),
            (CompletionRequest::new(Completion::Ada).with_top_p(0.0), "top_p"),
            (CompletionRequest::new(Completion::Ada).with_logprobs(0), "logprobs"),
            (
                CompletionRequest::new(Completion::Ada).with_presence_penalty(-1.0),
                "presence_penalty",
            ),
            (
                CompletionRequest::new(Completion::Ada).with_frequency_penalty(1.0),
                "frequency_penalty",
            ),
            (
                CompletionRequest::new(Completion::Ada).with_logit_bias("50256", -100),
                "logit_bias",
            ),
        ];

        for (request, key) in cases {
            let value = serde_json::to_value(&request).unwrap();
            assert_eq!(sorted_keys(&value).len(), 2, "unexpected keys for {key}");
            assert!(value.get(key).is_some(), "{key} missing");
        }
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let request: CompletionRequest<Completion> =
            serde_json::from_value(json!({"model": "text-ada-001", "temperature": 0.0})).unwrap();
        assert_eq!(request.model, Completion::TextAda001);
        assert_eq!(request.temperature, Some(0.0));
        assert_eq!(request.top_p, None);
        assert_eq!(request.max_tokens, 0);
        assert!(request.stop.is_empty());
    }

    #[test]
    fn test_request_without_model_is_rejected() {
        assert!(serde_json::from_value::<CompletionRequest<Completion>>(json!({"prompt": "x"})).is_err());
    }

    #[test]
    fn test_model_variants_are_closed() {
        fn variant_of<M: ModelId>(_: &CompletionRequest<M>) -> ModelVariant {
            M::VARIANT
        }

        let stock = CompletionRequest::new(Completion::Davinci);
        let tuned = CompletionRequest::new(FineTunedModel::new("davinci:ft-x"));
        assert_eq!(variant_of(&stock), ModelVariant::Stock);
        assert_eq!(variant_of(&tuned), ModelVariant::FineTuned);
    }

    #[test]
    fn test_response_with_asymmetric_logprobs_is_kept_verbatim() {
        let body = json!({
            "id": "cmpl-2",
            "object": "text_completion",
            "created": 1,
            "model": "davinci",
            "choices": [{
                "text": "ab",
                "index": 0,
                "finish_reason": "length",
                "logprobs": {
                    "tokens": ["a", "b"],
                    "token_logprobs": [-1.0, -2.0, -3.0],
                    "top_logprobs": [null],
                    "text_offset": [0, 1]
                }
            }],
            "usage": {"prompt_tokens": 1, "completion_tokens": 2, "total_tokens": 3}
        });

        let response: CompletionResponse<Completion> = serde_json::from_value(body).unwrap();
        let logprobs = response.choices[0].logprobs.as_ref().unwrap();
        assert_eq!(logprobs.tokens.len(), 2);
        assert_eq!(logprobs.token_logprobs.len(), 3);
        assert_eq!(logprobs.top_logprobs, vec![None]);
        assert!(matches!(
            logprobs.len_check(),
            Err(OpenAIError::LogprobLengthMismatch { .. })
        ));
    }

    #[test]
    fn test_logprob_result_serializes_back_unchanged() {
        let value = json!({
            "tokens": ["x"],
            "token_logprobs": [null],
            "top_logprobs": [null],
            "text_offset": [0]
        });
        let result: LogprobResult = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&result).unwrap(), value);
    }
}

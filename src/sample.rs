use core_types::ParameterRecord;

/// The five-parameter batch used by `probe` to check a running service.
pub fn sample_batch() -> Vec<ParameterRecord> {
    let entries = [
        (1, "alpha", 0.7505, "Primary scaling factor", true),
        (2, "beta", 1.3695, "Volatility coefficient", true),
        (3, "gamma", 0.9395, "Momentum adjustment", true),
        (4, "delta", 0.3256, "Risk sensitivity parameter", false),
        (5, "epsilon", 1.8765, "Liquidity factor", true),
    ];

    entries
        .into_iter()
        .map(|(id, parameter, value, description, is_active)| ParameterRecord {
            id: Some(id),
            parameter: Some(parameter.to_string()),
            value: Some(value),
            timestamp: Some("2025-05-25T12:50:35Z".to_string()),
            description: Some(description.to_string()),
            is_active: Some(is_active),
        })
        .collect()
}
